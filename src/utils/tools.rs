use log::info;

/// Version d'une dépendance exportée par `build.rs`, ou "Unknown".
pub fn dependency_version(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "Unknown",
    }
}

/// Affiche les informations Rust et les dépendances principales de la compilation.
pub fn show_rust_core_dependencies(workers: usize) {
    // Info système (Rust version, OS)
    info!(
        "Rust compiler version: {}",
        rustc_version_runtime::version()
    );
    info!("  Platform    : {}", std::env::consts::OS);
    info!("  Arch        : {}", std::env::consts::ARCH);
    info!("  Workers     : {}", workers);

    info!("Rust core dependancies");
    info!("  GL        version: {}", dependency_version(option_env!("GL")));
    info!("  GLFW      version: {}", dependency_version(option_env!("GLFW")));
    info!(
        "  CROSSBEAM version: {}",
        dependency_version(option_env!("CROSSBEAM"))
    );
    info!("  RAYON     version: {}", dependency_version(option_env!("RAYON")));
}
