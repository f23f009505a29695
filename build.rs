use chrono::{DateTime, Local};
use std::{process::Command, time::SystemTime};

fn exe_cmd(cmd: &mut Command) -> anyhow::Result<String> {
    let output = cmd.output()?;
    anyhow::ensure!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(String::from_utf8(output.stdout)?)
}

fn main() {
    // 不在git仓库中时不附带git信息
    let git_info = exe_cmd(Command::new("git").args(["log", "-n", "1", "--pretty=format:%h"]))
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|e| {
            println!("cargo:warning=git log run failed: {}", e.to_string().trim());
            String::default()
        });

    let build_time = DateTime::<Local>::from(SystemTime::now()).format("%Y/%m/%d-%H:%M:%S");
    if git_info.is_empty() {
        println!(
            "cargo:rustc-env=SIDIGEST_VERSION_INFO={}-{}",
            env!("CARGO_PKG_VERSION"),
            build_time
        );
    } else {
        println!(
            "cargo:rustc-env=SIDIGEST_VERSION_INFO={}-{}-{}",
            env!("CARGO_PKG_VERSION"),
            git_info,
            build_time
        );
    }

    println!("cargo:rerun-if-changed=build.rs");
}
