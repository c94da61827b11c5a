//! Command handlers.
//!
//! Every handler is pure given its arguments and the portfolio, except
//! `theme`, which writes the preference through the theme store, and the
//! random picks of `sudo` and `fortune`.

use std::sync::LazyLock;

use rand::seq::SliceRandom;
use regex::Regex;

use crate::config::{HELP_NAME_WIDTH, NEOFETCH_SKILLS};
use crate::error::CommandError;
use crate::models::{Portfolio, Project};

use super::text::{FORTUNES, HELP_TIPS, NEOFETCH_ART, STATIC_FILES, SUDO_RESPONSES};
use super::{Builtin, CommandContext, CommandResult, Interpreter};

static PROJECT_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^project([0-9]+)\.txt$").expect("project file pattern is valid"));

/// Inner width of the boxes drawn by `about` and `cat project<N>.txt`.
const BOX_WIDTH: usize = 45;
/// Inner width of the info panel drawn by `neofetch`.
const NEOFETCH_WIDTH: usize = 29;

/// Run `builtin` with `args`.
pub(super) fn run(
    builtin: Builtin,
    args: &[String],
    interpreter: &Interpreter,
    ctx: &mut CommandContext<'_>,
) -> Result<CommandResult, CommandError> {
    let portfolio = interpreter.portfolio();

    let result = match builtin {
        Builtin::Help => execute_help(interpreter),
        Builtin::About => execute_about(portfolio),
        Builtin::Projects => execute_projects(args, portfolio),
        Builtin::Contact => execute_contact(portfolio),
        Builtin::Resume => execute_resume(portfolio),
        Builtin::Clear => CommandResult::clear(),
        Builtin::Exit => execute_exit(portfolio),
        Builtin::Sudo => execute_sudo(args, ctx),
        Builtin::Ls => execute_ls(args, portfolio),
        Builtin::Cat => execute_cat(args, portfolio),
        Builtin::Fortune => pick(FORTUNES, ctx),
        Builtin::Neofetch => execute_neofetch(portfolio, ctx),
        Builtin::Theme => return execute_theme(args, ctx),
        Builtin::Gui => execute_gui(),
    };
    Ok(result)
}

fn pick(pool: &[&str], ctx: &mut CommandContext<'_>) -> CommandResult {
    let line = pool.choose(&mut *ctx.rng).copied().unwrap_or_default();
    CommandResult::output([line])
}

fn bullets<'a>(marker: &'a str, items: &'a [String]) -> impl Iterator<Item = String> + 'a {
    items.iter().map(move |item| format!("  {} {}", marker, item))
}

fn execute_help(interpreter: &Interpreter) -> CommandResult {
    let mut output = vec!["Available commands:".to_string(), String::new()];
    output.extend(interpreter.list_commands().map(|cmd| {
        format!(
            "  {:<width$} - {}",
            cmd.name,
            cmd.description,
            width = HELP_NAME_WIDTH
        )
    }));
    output.push(String::new());
    output.extend(HELP_TIPS.iter().map(|s| s.to_string()));
    CommandResult::output(output)
}

fn execute_about(portfolio: &Portfolio) -> CommandResult {
    let rule = "─".repeat(BOX_WIDTH);
    let mut output = vec![
        format!("╭{}╮", rule),
        format!("│{:^width$}│", portfolio.name, width = BOX_WIDTH),
        format!("│{:^width$}│", portfolio.title, width = BOX_WIDTH),
        format!("╰{}╯", rule),
        String::new(),
        portfolio.bio.clone(),
        String::new(),
        "Skills & Technologies:".to_string(),
    ];
    output.extend(bullets("•", &portfolio.skills));
    output.extend(
        [
            "",
            "Want to know more? Try these commands:",
            "  projects  - View my work",
            "  contact   - Get in touch",
            "  resume    - See my experience",
        ]
        .map(String::from),
    );
    CommandResult::output(output)
}

fn execute_projects(args: &[String], portfolio: &Portfolio) -> CommandResult {
    if !args.is_empty() {
        return CommandResult::output(["Usage: projects"]);
    }

    let mut output = vec!["Projects Portfolio:".to_string(), String::new()];
    for (i, project) in portfolio.projects.iter().enumerate() {
        let n = i + 1;
        output.push(format!("{}. {}", n, project.name));
        output.push(format!("   {}", project.description));
        output.push(format!("   Tech: {}", project.technologies.join(", ")));
        output.push(format!("   Commands: cat project{}.txt", n));
        output.push(String::new());
    }
    output.push("Use \"cat project<number>.txt\" for detailed information.".to_string());
    CommandResult::output(output)
}

fn execute_contact(portfolio: &Portfolio) -> CommandResult {
    let contact = &portfolio.contact;
    CommandResult::output([
        format!("Contact Information for {}:", portfolio.name),
        String::new(),
        format!("📧 Email:    {}", contact.email),
        format!("💼 LinkedIn: {}", contact.linkedin),
        format!("🐙 GitHub:   {}", contact.github),
        format!(
            "📱 Phone:    {}",
            contact.phone.as_deref().unwrap_or("Available upon request")
        ),
        format!("📍 Location: {}", contact.location),
        String::new(),
        "Feel free to reach out! I'm always open to new opportunities".to_string(),
        "and interesting conversations about technology.".to_string(),
    ])
}

fn execute_resume(portfolio: &Portfolio) -> CommandResult {
    let resume = &portfolio.resume;
    CommandResult::output([
        format!("{}'s Resume Summary:", portfolio.name),
        String::new(),
        resume.summary.clone(),
        String::new(),
        format!("Last Updated: {}", resume.last_updated),
        format!("Download: {}", resume.download_url),
        String::new(),
        "For detailed experience, skills, and education,".to_string(),
        "please download the full resume using the link above.".to_string(),
    ])
}

fn execute_exit(portfolio: &Portfolio) -> CommandResult {
    CommandResult::exit([
        "Thanks for visiting my portfolio! 👋".to_string(),
        String::new(),
        "Before you go:".to_string(),
        "  • Check out my projects on GitHub".to_string(),
        "  • Connect with me on LinkedIn".to_string(),
        "  • Feel free to reach out anytime".to_string(),
        String::new(),
        "logout".to_string(),
        String::new(),
        format!("Connection to {} closed.", portfolio.identity.closing_host),
    ])
}

fn execute_sudo(args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult {
    let mut result = pick(SUDO_RESPONSES, ctx);
    if !args.is_empty() {
        result.output.extend([
            String::new(),
            format!("Attempted command: sudo {}", args.join(" ")),
            "Try running the command without sudo, or check out my actual projects!".to_string(),
        ]);
    }
    result
}

fn execute_ls(args: &[String], portfolio: &Portfolio) -> CommandResult {
    let user = &portfolio.identity.user;
    let entry = |mode: &str, links: u8, size: &str, name: &str| {
        format!("{}  {} {} {} {} Oct  1 12:00 {}", mode, links, user, user, size, name)
    };

    let long = args.iter().any(|a| a == "-la" || a == "-al");
    if !long {
        return CommandResult::output([
            "projects/  skills/  contact/  about.txt  resume.pdf  README.md",
            "",
            "Use \"ls -la\" for detailed view or try these commands:",
            "  cat about.txt    - Learn about me",
            "  cd projects/     - View my projects (just kidding, use \"projects\")",
            "  cat resume.pdf   - View resume info",
        ]);
    }

    CommandResult::output([
        "total 24".to_string(),
        entry("drwxr-xr-x", 5, "4096", "."),
        entry("drwxr-xr-x", 3, "4096", ".."),
        entry("-rw-r--r--", 1, " 220", ".bash_logout"),
        entry("-rw-r--r--", 1, "3771", ".bashrc"),
        entry("-rw-r--r--", 1, " 807", ".profile"),
        entry("drwxr-xr-x", 2, "4096", "projects/"),
        entry("drwxr-xr-x", 2, "4096", "skills/"),
        entry("drwxr-xr-x", 2, "4096", "contact/"),
        entry("-rw-r--r--", 1, "2048", "about.txt"),
        entry("-rw-r--r--", 1, "1024", "resume.pdf"),
        entry("-rw-r--r--", 1, " 512", "README.md"),
    ])
}

fn execute_cat(args: &[String], portfolio: &Portfolio) -> CommandResult {
    let Some(file) = args.first() else {
        // Bare `cat` explains itself instead of failing
        let mut output = vec![
            "cat: missing file operand".to_string(),
            "Try: cat <filename>".to_string(),
            String::new(),
            "Readable files:".to_string(),
        ];
        output.extend(STATIC_FILES.iter().map(|f| format!("  {}", f)));
        output.extend((1..=portfolio.projects.len()).map(|n| format!("  project{}.txt", n)));
        return CommandResult::output(output);
    };
    let filename = file.to_lowercase();

    if let Some(caps) = PROJECT_FILE.captures(&filename) {
        let digits = &caps[1];
        return match digits.parse().ok().and_then(|n| portfolio.project(n)) {
            Some(project) => project_sheet(project),
            None => CommandResult::error([format!(
                "cat: project{}.txt: No such file or directory",
                digits
            )]),
        };
    }

    match filename.as_str() {
        "about.txt" => execute_about(portfolio),
        "resume.pdf" => execute_resume(portfolio),
        "readme.md" => readme(portfolio),
        _ => CommandResult::error([format!("cat: {}: No such file or directory", filename)]),
    }
}

fn project_sheet(project: &Project) -> CommandResult {
    // Header: "╭─ " + name + " " + fill, same outer width as the bottom rule
    let fill = (BOX_WIDTH + 2).saturating_sub(project.name.chars().count() + 3).max(1);
    let mut output = vec![
        format!("╭─ {} {}╮", project.name, "─".repeat(fill)),
        format!("│ {:<width$} │", project.description, width = BOX_WIDTH),
        format!("╰{}╯", "─".repeat(BOX_WIDTH + 2)),
        String::new(),
        project.details.clone(),
        String::new(),
        "Technologies Used:".to_string(),
    ];
    output.extend(bullets("•", &project.technologies));
    output.push(String::new());
    output.push("Links:".to_string());
    if let Some(url) = &project.github_url {
        output.push(format!("  🐙 GitHub: {}", url));
    }
    if let Some(url) = &project.live_url {
        output.push(format!("  🌐 Live Demo: {}", url));
    }
    CommandResult::output(output)
}

fn readme(portfolio: &Portfolio) -> CommandResult {
    let mut output = vec![format!("# {}'s Terminal Portfolio", portfolio.name)];
    output.extend(
        [
            "",
            "Welcome to my interactive terminal portfolio!",
            "",
            "## Available Commands",
            "- `help` - Show all available commands",
            "- `about` - Learn about me",
            "- `projects` - View my projects",
            "- `contact` - Get my contact info",
            "- `resume` - View resume summary",
            "",
            "## Fun Commands",
            "- `neofetch` - System info with style",
            "- `fortune` - Random quotes and facts",
            "- `ls` - List directory contents",
            "",
            "Enjoy exploring! 🚀",
        ]
        .map(String::from),
    );
    CommandResult::output(output)
}

fn execute_neofetch(portfolio: &Portfolio, ctx: &CommandContext<'_>) -> CommandResult {
    let identity = &portfolio.identity;
    let info = [
        format!("OS: {} {}", identity.os, identity.version),
        "Host: Portfolio Terminal".to_string(),
        "Kernel: Rust + WebAssembly".to_string(),
        "Uptime: 5+ years coding".to_string(),
        "Shell: Developer Shell".to_string(),
        "Resolution: Problem Solver".to_string(),
        "DE: VS Code / IntelliJ".to_string(),
        "WM: Browser DevTools".to_string(),
        format!("Theme: {}", ctx.themes.current().name),
        "CPU: Coffee Powered".to_string(),
        "Memory: Full of Ideas".to_string(),
        "GPU: Creative Mind".to_string(),
    ];
    let art_width = NEOFETCH_ART.first().map_or(0, |a| a.chars().count());
    let blank = " ".repeat(art_width);
    let rule = "─".repeat(NEOFETCH_WIDTH);

    let panel = std::iter::once(format!("╭{}╮", rule)).chain(
        info.iter()
            .map(|line| format!("│ {:<width$} │", line, width = NEOFETCH_WIDTH - 2)),
    );

    let mut output = vec![blank.clone()];
    output.extend(
        NEOFETCH_ART
            .iter()
            .zip(panel)
            .map(|(art, right)| format!("{}{}", art, right)),
    );
    output.push(format!("{}╰{}╯", blank, rule));
    output.push(String::new());
    output.push(format!(
        "{}@{} ~ $ echo \"Top Skills:\"",
        identity.user, identity.host
    ));
    output.extend(
        portfolio
            .skills
            .iter()
            .take(NEOFETCH_SKILLS)
            .map(|skill| format!("  ● {}", skill)),
    );
    output.push(String::new());
    output.push("Run \"about\" for more information!".to_string());
    CommandResult::output(output)
}

fn execute_theme(
    args: &[String],
    ctx: &mut CommandContext<'_>,
) -> Result<CommandResult, CommandError> {
    let listing: Vec<String> = ctx
        .themes
        .catalog()
        .keys()
        .map(|k| format!("  • {}", k))
        .collect();

    let Some(requested) = args.first().map(|a| a.to_lowercase()) else {
        let mut output = vec!["Available themes:".to_string(), String::new()];
        output.extend(listing);
        output.extend(
            ["", "Usage: theme <name>", "Example: theme dracula"].map(String::from),
        );
        return Ok(CommandResult::output(output));
    };

    if !ctx.themes.catalog().contains(&requested) {
        let mut output = vec![
            format!("Error: Theme '{}' not found.", requested),
            String::new(),
            "Available themes:".to_string(),
        ];
        output.extend(listing);
        return Ok(CommandResult::output(output));
    }

    ctx.themes.set(&requested)?;
    Ok(CommandResult::output([
        format!("Switching to '{}' theme...", requested),
        "Reloading terminal...".to_string(),
    ]))
}

fn execute_gui() -> CommandResult {
    CommandResult::output([
        "GUI mode is not implemented yet! 😅",
        "",
        "But honestly, isn't this terminal interface cooler?",
        "You can find everything you need right here:",
        "",
        "  • about    - Learn about me",
        "  • projects - See my work",
        "  • contact  - Get in touch",
        "",
        "Stay in the matrix! 😎",
    ])
}

// =============================================================================
// Tests
// =============================================================================
