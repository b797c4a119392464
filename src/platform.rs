//! Platform-specific privilege checks.

/// Whether the current process runs with administrator privileges.
///
/// On Unix this means an effective UID of 0; on Windows it asks the shell
/// whether the user is a member of the Administrators group. Other targets
/// always report `false`.
pub fn is_admin() -> bool {
    let admin = imp::is_admin();
    tracing::debug!(admin, "Checked process privileges");
    admin
}

#[cfg(unix)]
mod imp {
    pub fn is_admin() -> bool {
        // SAFETY: geteuid has no preconditions and cannot fail.
        unsafe { libc::geteuid() == 0 }
    }
}

#[cfg(windows)]
mod imp {
    use windows_sys::Win32::UI::Shell::IsUserAnAdmin;

    pub fn is_admin() -> bool {
        // SAFETY: IsUserAnAdmin takes no arguments and only reads the
        // current process token.
        unsafe { IsUserAnAdmin() != 0 }
    }
}

#[cfg(not(any(unix, windows)))]
mod imp {
    pub fn is_admin() -> bool {
        false
    }
}
