use std::env;

fn is_windows_target() -> bool {
    env::var("CARGO_CFG_TARGET_OS").map(|os| os == "windows").unwrap_or(false)
}

fn target_name() -> String {
    println!("cargo:rerun-if-env-changed=LAUNCHER_TARGET_NAME");

    // Allow manual override
    let target_name = match env::var("LAUNCHER_TARGET_NAME") {
        Ok(name) if !name.is_empty() => name,
        _ if is_windows_target() => "imapviewer.exe".to_owned(),
        _ => "imapviewer".to_owned()
    };

    if target_name.contains(['/', '\\']) {
        panic!("LAUNCHER_TARGET_NAME must be a bare file name, got {:?}", target_name);
    }

    target_name
}

/// `1.2.3-beta.4` -> `1,2,3,0`; VERSIONINFO wants exactly four numeric fields.
fn numeric_version(version: &str) -> String {
    let release = version.split(['-', '+']).next().unwrap_or_default();
    let mut fields: Vec<u16> = release
        .split('.')
        .map(|field| field.parse().unwrap_or(0))
        .take(4)
        .collect();
    fields.resize(4, 0);

    fields.iter().map(u16::to_string).collect::<Vec<_>>().join(",")
}

fn resource_macros(target_name: &str) -> Vec<String> {
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let exe_name = format!("{}.exe", env::var("CARGO_PKG_NAME").unwrap_or_default());

    vec![
        format!("LAUNCHER_VERSION_STR=\"{}\"", version),
        format!("LAUNCHER_VERSION_NUM={}", numeric_version(&version)),
        format!("LAUNCHER_EXE_STR=\"{}\"", exe_name),
        format!("LAUNCHER_TARGET_STR=\"app/{}\"", target_name)
    ]
}

fn embed_launcher_resources(target_name: &str) {
    println!("cargo:rerun-if-changed=assets");

    if !is_windows_target() {
        return;
    }

    embed_resource::compile("assets/launcher.rc", resource_macros(target_name));
}

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-changed=locales");

    let target_name = target_name();
    println!("cargo:rustc-env=LAUNCHER_TARGET_NAME={}", target_name);

    embed_launcher_resources(&target_name);
}
