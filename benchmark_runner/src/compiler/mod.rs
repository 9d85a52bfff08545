//!
//! The benchmark compiler dispatcher.
//!

pub mod artifact;
pub mod error;


use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use colored::Colorize;

use crate::config::Config;
use crate::resolver::Resolver;
use crate::test_spec::kind::Kind;
use crate::test_spec::part::Part;
use crate::test_spec::TestSpec;
use crate::tool::command::Command;
use crate::tool::ToolInvoker;

use self::artifact::Artifact;
use self::artifact::Target;
use self::error::Error;

///
/// Builds benchmark artifacts with the external toolchains.
///
/// Nothing is cached: every run rebuilds every artifact it needs.
///
pub struct Dispatcher {
    /// The tool invoker.
    invoker: Arc<dyn ToolInvoker>,
    /// The configuration.
    config: Arc<Config>,
    /// Whether progress lines are suppressed.
    quiet: bool,
}

impl Dispatcher {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(invoker: Arc<dyn ToolInvoker>, config: Arc<Config>, quiet: bool) -> Self {
        Self {
            invoker,
            config,
            quiet,
        }
    }

    ///
    /// Builds the native executable of a simple benchmark.
    ///
    /// The executable is placed into the sandbox root, at the benchmark's path relative
    /// to the benchmark directory, without the extension.
    ///
    pub fn compile_native(&self, spec: &TestSpec) -> Result<Artifact, Error> {
        if spec.kind != Kind::Simple {
            return Err(Error::NotSimple {
                name: spec.name.clone(),
            });
        }

        let relative_path = self.relative_path(spec.path.as_path())?.with_extension("");
        let output_path = self.config.sandbox_root.join(relative_path);
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| Error::Directory {
                path: parent.to_path_buf(),
                error,
            })?;
        }

        self.print_compiling(Target::Native, spec.path.as_path());
        let command = Command::new(
            self.config.tools.native_compiler.as_str(),
            self.config.timeout(),
        )
        .arg(spec.path.as_os_str())
        .args(self.config.support_source_paths())
        .arg("-o")
        .arg(output_path.as_os_str());
        self.invoker
            .invoke(&command)
            .map_err(|error| Error::Toolchain {
                path: spec.path.clone(),
                error,
            })?;

        Ok(Artifact::new(Target::Native, output_path))
    }

    ///
    /// Builds the sandbox module of a simple benchmark.
    ///
    pub fn compile_sandbox(&self, spec: &TestSpec) -> Result<Artifact, Error> {
        if spec.kind != Kind::Simple {
            return Err(Error::NotSimple {
                name: spec.name.clone(),
            });
        }

        self.compile_sandbox_source(spec.path.as_path())
    }

    ///
    /// Builds a shim component with its own build script.
    ///
    /// The module path is derived from the component name, since components live
    /// outside of the benchmark directory.
    ///
    pub fn compile_shim(&self, component_directory: &Path) -> Result<Artifact, Error> {
        let name = component_directory
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| Error::ComponentName {
                path: component_directory.to_path_buf(),
            })?;

        self.print_compiling(Target::SandboxShim, component_directory);
        let command = Command::new(self.config.tools.shell.as_str(), self.config.timeout())
            .arg(
                component_directory
                    .join(self.config.tools.shim_build_script.as_str())
                    .as_os_str(),
            )
            .arg(self.config.sandbox_root.as_os_str())
            .current_dir(component_directory);
        self.invoker
            .invoke(&command)
            .map_err(|error| Error::Toolchain {
                path: component_directory.to_path_buf(),
                error,
            })?;

        let module_path = PathBuf::from(name).with_extension(self.config.module_extension.as_str());
        Ok(Artifact::new(Target::SandboxShim, module_path))
    }

    ///
    /// Builds every part of a composite benchmark, in order.
    ///
    /// Shim components are resolved first. The first failing part fails the whole
    /// benchmark.
    ///
    pub fn compile_composite(
        &self,
        spec: &TestSpec,
        resolver: &mut Resolver,
    ) -> Result<Vec<Artifact>, Error> {
        let mut artifacts = Vec::with_capacity(spec.parts.len());
        for part in spec.parts.iter() {
            let artifact = match part {
                Part::Source(name) => {
                    let source_path = self
                        .config
                        .benchmark_directory
                        .join(name)
                        .with_extension(self.config.source_extension.as_str());
                    self.compile_sandbox_source(source_path.as_path())?
                }
                Part::Shim(name) => {
                    let component_directory = resolver.resolve(name.as_str())?;
                    self.compile_shim(component_directory.as_path())?
                }
            };
            artifacts.push(artifact);
        }
        Ok(artifacts)
    }

    ///
    /// Builds a sandbox module from a source in the benchmark directory.
    ///
    /// The toolchain places its output into the sandbox root by itself.
    ///
    fn compile_sandbox_source(&self, source_path: &Path) -> Result<Artifact, Error> {
        let module_path = self
            .relative_path(source_path)?
            .with_extension(self.config.module_extension.as_str());

        self.print_compiling(Target::Sandbox, source_path);
        let command = Command::new(
            self.config.tools.sandbox_compiler.as_str(),
            self.config.timeout(),
        )
        .arg(source_path.as_os_str())
        .args(self.config.support_source_paths());
        self.invoker
            .invoke(&command)
            .map_err(|error| Error::Toolchain {
                path: source_path.to_path_buf(),
                error,
            })?;

        Ok(Artifact::new(Target::Sandbox, module_path))
    }

    ///
    /// Returns the source path relative to the benchmark directory.
    ///
    fn relative_path(&self, path: &Path) -> Result<PathBuf, Error> {
        path.strip_prefix(self.config.benchmark_directory.as_path())
            .map(Path::to_path_buf)
            .map_err(|_| Error::OutsideBenchmarkDirectory {
                path: path.to_path_buf(),
                base: self.config.benchmark_directory.clone(),
            })
    }

    ///
    /// Prints the compilation progress line.
    ///
    fn print_compiling(&self, target: Target, path: &Path) {
        if self.quiet {
            return;
        }
        println!(
            "   {} {:?} ({target})",
            "Compiling".bright_green().bold(),
            path,
        );
    }
}
