#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // Embed the icon only when res/rtimetracker.ico is present
    if !std::path::Path::new("res/rtimetracker.ico").exists() {
        return;
    }

    let mut res = WindowsResource::new();
    res.set_icon("res/rtimetracker.ico")
        .set("FileDescription", "rTimeTracker")
        .set("ProductName", "rTimeTracker")
        .set("OriginalFilename", "rtimetracker.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
