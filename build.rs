//! Build script: buffer budget and the externally vectorized C kernels.

use std::env;

const DEFAULT_BUFSIZE: u64 = 1 << 28;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(c_implementation_active)");
    println!("cargo:rerun-if-env-changed=REDUCE_BUFSIZE");

    let bufsize = match env::var("REDUCE_BUFSIZE") {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .expect("REDUCE_BUFSIZE must be an unsigned integer byte count"),
        Err(_) => DEFAULT_BUFSIZE,
    };
    assert!(bufsize >= 1024, "REDUCE_BUFSIZE must be at least 1024 bytes");
    println!("cargo:rustc-env=REDUCE_BUFSIZE={}", bufsize);

    if env::var_os("CARGO_FEATURE_C_IMPL").is_none() {
        return;
    }

    let build = cc::Build::new();
    let compiler = build.get_compiler();

    let compiler_name = if compiler.is_like_clang() {
        let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
        if target_os == "macos" {
            "Apple Clang"
        } else {
            "Clang"
        }
    } else if compiler.is_like_gnu() {
        "GCC"
    } else if compiler.is_like_msvc() {
        "MSVC"
    } else {
        println!("cargo:warning=C compiler is not compatible (needs GCC, Clang, or MSVC). External kernels disabled.");
        return;
    };

    let rustflags = env::var("RUSTFLAGS").unwrap_or_default();
    let encoded_rustflags = env::var("CARGO_ENCODED_RUSTFLAGS").unwrap_or_default();
    let is_rust_native =
        rustflags.contains("target-cpu=native") || encoded_rustflags.contains("target-cpu=native");

    let mut build = cc::Build::new();

    let c_files = glob::glob("src/**/*.c")
        .expect("Failed to read glob pattern")
        .filter_map(|entry| entry.ok());

    for file in c_files {
        println!("cargo:rerun-if-changed={}", file.display());
        build.file(file);
    }

    // Let the C compiler reassociate the reductions so it can vectorize them.
    build
        .opt_level(3)
        .flag_if_supported("-ffast-math")
        .flag_if_supported("/fp:fast");

    if is_rust_native {
        build.flag_if_supported("-march=native");
    }

    match build.try_compile("reduce_c") {
        Ok(()) => {
            println!("cargo:rustc-cfg=c_implementation_active");
            println!("cargo:rustc-env=C_COMPILER_NAME={}", compiler_name);
        }
        Err(e) => {
            println!("cargo:warning=External C kernels disabled: {}", e);
        }
    }
}
