use std::process::Command;
use tracing::info;

/// Environment variables that decide where desktop notifications end up
const SESSION_VARS: &[&str] = &[
    "XDG_SESSION_TYPE",
    "XDG_CURRENT_DESKTOP",
    "DISPLAY",
    "WAYLAND_DISPLAY",
    "DBUS_SESSION_BUS_ADDRESS",
];

/// Log session information for debugging notification delivery
pub fn log_session_info() {
    info!("=== Session Information ===");

    // Kernel Version
    if let Ok(kernel) = get_command_output("uname", &["-sr"]) {
        info!("Kernel: {}", kernel);
    }

    // OS / Distribution
    if let Ok(os_release) = std::fs::read_to_string("/etc/os-release")
        && let Some(name) = pretty_name(&os_release)
    {
        info!("OS: {}", name);
    }

    for (var, value) in session_vars() {
        match value {
            Some(value) => info!("{}: {}", var, value),
            None => info!("{}: <unset>", var),
        }
    }

    info!("===========================");
}

fn session_vars() -> Vec<(&'static str, Option<String>)> {
    SESSION_VARS
        .iter()
        .map(|var| (*var, std::env::var(var).ok()))
        .collect()
}

fn pretty_name(os_release: &str) -> Option<&str> {
    os_release
        .lines()
        .find_map(|line| line.strip_prefix("PRETTY_NAME="))
        .map(|name| name.trim_matches('"'))
}

fn get_command_output(cmd: &str, args: &[&str]) -> anyhow::Result<String> {
    let output = Command::new(cmd).args(args).output()?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
