fn main() {
    // Embed Windows resources (icon, version info)
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set("ProductName", "BrightnessTray");
        res.set("FileDescription", "HDR brightness boost control for Windows");
        res.set("CompanyName", "BrightnessTray Contributors");
        res.set("LegalCopyright", "Copyright © 2026 BrightnessTray Contributors");
        res.set("OriginalFilename", "brightness-tray.exe");
        res.set("FileVersion", env!("CARGO_PKG_VERSION"));
        res.set("ProductVersion", env!("CARGO_PKG_VERSION"));
        res.compile().unwrap();
    }
}
