use std::fs;
use std::path::Path;

// Bundles the AvaliaAqui web client (`trunk build` output) into `static/dist`
// for `services::client`. The directory is created empty when the client has
// not been built, so the API still compiles and runs on its own.
fn main() {
    let bundle_dir = Path::new("static/dist");
    let client_dist = Path::new("../frontend/dist");

    println!("cargo:rerun-if-changed=../frontend/dist");

    if client_dist.exists() {
        let _ = fs::remove_dir_all(bundle_dir);
        fs::create_dir_all(bundle_dir).unwrap();
        fs_extra::dir::copy(
            client_dist,
            bundle_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).content_only(true),
        )
            .unwrap();
    } else {
        println!("cargo:warning=frontend/dist not found, serving the API without the web client");
        fs::create_dir_all(bundle_dir).unwrap();
    }
}
