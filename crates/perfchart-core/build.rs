// File: crates/perfchart-core/build.rs
// Summary: Links Windows system libraries that Skia text layout (ICU) needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
