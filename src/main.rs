use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;

use family_profiles::catalog::{AVATAR_CHOICES, COLOR_CHOICES};
use family_profiles::directory::{MemoryDirectory, UserDirectory};
use family_profiles::profiles::SetupFlow;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    eprintln!("👪 Family Profiles v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Set up a profile: name, avatar, accent color.");
    eprintln!("   Press Enter at a picker to keep the default.\n");

    let directory = Arc::new(MemoryDirectory::new());
    let mut flow = SetupFlow::new(Arc::clone(&directory) as Arc<dyn UserDirectory>);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    // Name — keep asking until the submit gate opens.
    loop {
        eprint!("Name: ");
        io::stderr().flush().ok();
        let Some(line) = lines.next() else {
            anyhow::bail!("stdin closed before a name was entered");
        };
        flow.set_name(line?);
        if flow.can_submit() {
            break;
        }
        eprintln!("A name is required.");
    }

    eprintln!("Avatars:");
    for (i, avatar) in AVATAR_CHOICES.iter().enumerate() {
        eprintln!("  {}) {}", i + 1, avatar);
    }
    eprint!("Pick an avatar [1-{}]: ", AVATAR_CHOICES.len());
    io::stderr().flush().ok();
    if let Some(avatar) = pick(lines.next().transpose()?, AVATAR_CHOICES) {
        flow.choose_avatar(avatar);
    }

    eprintln!("Accent colors:");
    for (i, color) in COLOR_CHOICES.iter().enumerate() {
        eprintln!("  {}) {}", i + 1, color);
    }
    eprint!("Pick a color [1-{}]: ", COLOR_CHOICES.len());
    io::stderr().flush().ok();
    if let Some(color) = pick(lines.next().transpose()?, COLOR_CHOICES) {
        flow.choose_color(color);
    }

    let profile = flow.submit().await?;
    println!(
        "{} {} is ready (accent {})",
        profile.avatar_emoji, profile.name, profile.color
    );

    let current = directory.current_user().await;
    println!(
        "Directory: {} profile(s), current: {}",
        directory.users().await.len(),
        current.map(|p| p.name).unwrap_or_else(|| "none".to_string())
    );

    Ok(())
}

/// Map a 1-based picker answer onto `choices`; blank or out-of-range input
/// keeps the default.
fn pick(line: Option<String>, choices: &[&'static str]) -> Option<&'static str> {
    let line = line?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let index: usize = trimmed.parse().ok()?;
    choices.get(index.checked_sub(1)?).copied()
}
