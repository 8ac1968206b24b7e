use std::{env, env::VarError};

/// The server takes no arguments. Passing any prints the help text and the current configuration instead.
pub fn handle_command_line_args() -> bool {
    let has_cli_args = env::args().count() > 1;
    if has_cli_args {
        display_readme();
        display_envs();
    }
    has_cli_args
}

fn display_readme() {
    const README: &str = include_str!("./cli-help.txt");
    println!("\n{README}\n");
}

fn display_envs() {
    const DISPLAY_ENVS: [&str; 7] = [
        "RUST_LOG",
        "MKT_HOST",
        "MKT_PORT",
        "MKT_DISABLE_AUTH",
        "MKT_NO_SEED",
        "MKT_SEED_CONFIG",
        "MKT_TOKEN_TTL",
    ];

    println!("Current environment values:");
    DISPLAY_ENVS.iter().for_each(|&name| {
        let val = match env::var(name) {
            Ok(s) => s,
            Err(VarError::NotPresent) => "Not set".into(),
            Err(VarError::NotUnicode(s)) => format!("Invalid value: {}", s.to_string_lossy()),
        };
        println!("  {name:<35} {val:<15}");
    })
}
