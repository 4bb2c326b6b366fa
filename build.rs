fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let building_python_module = std::env::var_os("CARGO_FEATURE_PYTHON").is_some();
    let macos = std::env::var("CARGO_CFG_TARGET_OS").is_ok_and(|os| os == "macos");

    // The interpreter provides the Python symbols when it loads the module.
    if building_python_module && macos {
        for arg in ["-undefined", "dynamic_lookup"] {
            println!("cargo:rustc-cdylib-link-arg={arg}");
        }
    }
}
