//! Build script for Aerial
//! Embeds Windows resource metadata (shown in the screensaver list and Task Manager)

fn main() {
    #[cfg(windows)]
    {
        let mut res = winresource::WindowsResource::new();
        res.set("FileDescription", "Aerial");
        res.set("ProductName", "Aerial Screensaver");
        res.set("InternalName", "Aerial");
        res.set("OriginalFilename", "Aerial.scr");
        res.set("ProductVersion", env!("CARGO_PKG_VERSION"));
        res.set("FileVersion", env!("CARGO_PKG_VERSION"));

        if let Err(e) = res.compile() {
            println!("cargo:warning=Failed to compile Windows resources: {}", e);
        }
    }
}
