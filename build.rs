#[cfg(windows)]
fn main() {
    let mut res = winres::WindowsResource::new();
    res.set("FileDescription", "SecureVault Credential Manager Shell");
    res.set("ProductName", "SecureVault");
    res.set("LegalCopyright", "Copyright (C) 2025 SecureVault");
    if let Err(e) = res.compile() {
        eprintln!("winres compile warning: {e}");
    }
}

#[cfg(not(windows))]
fn main() {}
