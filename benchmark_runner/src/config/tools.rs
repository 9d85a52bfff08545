//!
//! The external tool names.
//!

///
/// The external tool names.
///
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tools {
    /// The native C compiler.
    pub native_compiler: String,
    /// The cross-compilation toolchain producing sandbox modules.
    pub sandbox_compiler: String,
    /// The sandbox boot tool.
    pub sandbox_boot: String,
    /// The shell running shim build scripts.
    pub shell: String,
    /// The shim build script name inside every component directory.
    pub shim_build_script: String,
    /// The version control client.
    pub version_control: String,
    /// The program granting elevated privileges to the sandbox boot tool.
    pub elevation: String,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            native_compiler: "cc".to_owned(),
            sandbox_compiler: "lind_compile".to_owned(),
            sandbox_boot: "lind-boot".to_owned(),
            shell: "bash".to_owned(),
            shim_build_script: "compile_grate.sh".to_owned(),
            version_control: "git".to_owned(),
            elevation: "sudo".to_owned(),
        }
    }
}
