fn main() {
    // The checked-in C API subset in src/bindings/ is hand-maintained against
    // the cef_binary_140 headers. The regenerate-bindings feature produces a
    // raw bindgen dump from a local CEF distribution for diffing against it
    // when moving to a new engine version; default builds do nothing here.
    println!("cargo:rerun-if-changed=src/bindings/cef_capi_bindings.rs");

    #[cfg(feature = "regenerate-bindings")]
    regenerate::run();
}

#[cfg(feature = "regenerate-bindings")]
mod regenerate {
    use std::{env, path::PathBuf};

    pub fn run() {
        let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
        let include_dir = manifest_dir.join("cef_artifacts");
        let header = include_dir.join("include/capi/cef_app_capi.h");

        assert!(
            header.is_file(),
            "cef_app_capi.h not found; unpack a cef_binary distribution into cef_artifacts/"
        );

        let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

        let bindings = bindgen::Builder::default()
            .header(header.to_str().unwrap())
            .clang_arg(format!("-I{}", include_dir.display()))
            .allowlist_type("cef_.*")
            .allowlist_function("cef_.*")
            .allowlist_var("cef_.*")
            .generate()
            .expect("Unable to generate CEF C API bindings");

        let dump = out_dir.join("cef_capi_generated.rs");
        bindings
            .write_to_file(&dump)
            .expect("Couldn't write CEF C API bindings");

        // Not consumed by the build: diff this against the checked-in subset.
        println!(
            "cargo:warning=bindgen dump written to {}",
            dump.display()
        );
    }
}
