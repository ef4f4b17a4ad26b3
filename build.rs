fn main() {
    // Compile Slint UI files
    slint_build::compile("ui/popup.slint").unwrap();

    // Embed Windows resources (version info)
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set("ProductName", "IconPicker");
        res.set("FileDescription", "Tray icon picker");
        res.set("CompanyName", "IconPicker Contributors");
        res.set("OriginalFilename", "iconpicker.exe");
        res.set("FileVersion", env!("CARGO_PKG_VERSION"));
        res.set("ProductVersion", env!("CARGO_PKG_VERSION"));
        res.compile().unwrap();
    }
}
