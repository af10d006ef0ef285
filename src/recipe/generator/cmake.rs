//! CMake driver.

use super::{BuildGenerator, tool_detection};
use crate::recipe::{Error, Result, configure::ConfiguredBuild};
use std::{
    collections::VecDeque,
    path::{Path, PathBuf},
    process::Stdio,
};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    process::Command,
};

/// Lines of stderr kept for the error report of a failed step.
const STDERR_TAIL_LINES: usize = 40;

/// Runs `cmake` for configure, build and install.
#[derive(Clone, Debug)]
pub struct CMake {
    program: PathBuf,
    generator: Option<String>,
    jobs: usize,
}

impl CMake {
    /// Locate `cmake` (explicit path or `PATH`) and create a driver.
    pub async fn locate(explicit: Option<&Path>) -> Result<Self> {
        Ok(Self::new(tool_detection::find_cmake(explicit).await?))
    }

    /// Driver for a known `cmake` executable.
    pub fn new(program: PathBuf) -> Self {
        Self {
            program,
            generator: None,
            jobs: num_cpus::get(),
        }
    }

    /// Use a specific CMake generator (`-G`), e.g. `Ninja`.
    pub fn with_generator(mut self, generator: Option<String>) -> Self {
        self.generator = generator;
        self
    }

    /// Number of parallel build jobs. Default: number of CPUs.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    fn configure_args(&self, build: &ConfiguredBuild) -> Vec<String> {
        let layout = build.layout();
        let mut args = vec![
            "-S".to_string(),
            layout.source_folder().display().to_string(),
            "-B".to_string(),
            layout.build_folder().display().to_string(),
        ];
        if let Some(generator) = &self.generator {
            args.push("-G".to_string());
            args.push(generator.clone());
        }
        args.push(format!(
            "-DCMAKE_INSTALL_PREFIX={}",
            layout.package_folder().display()
        ));
        args.extend(build.configuration().cmake_args());
        args
    }

    fn build_args(&self, build: &ConfiguredBuild, target: Option<&str>) -> Vec<String> {
        let mut args = vec![
            "--build".to_string(),
            build.layout().build_folder().display().to_string(),
            "--config".to_string(),
            build.configuration().build_type().to_string(),
        ];
        if let Some(target) = target {
            args.push("--target".to_string());
            args.push(target.to_string());
        }
        args.push("--parallel".to_string());
        args.push(self.jobs.to_string());
        args
    }

    fn install_args(&self, build: &ConfiguredBuild) -> Vec<String> {
        vec![
            "--install".to_string(),
            build.layout().build_folder().display().to_string(),
            "--config".to_string(),
            build.configuration().build_type().to_string(),
            "--prefix".to_string(),
            build.layout().package_folder().display().to_string(),
        ]
    }

    /// Run cmake with `args`, streaming stdout to the log and keeping the
    /// tail of stderr for the error report.
    async fn run(&self, args: Vec<String>, working_dir: &Path) -> Result<()> {
        let command_line = format!("{} {}", self.program.display(), args.join(" "));
        log::debug!("Running: {command_line}");

        let mut child = Command::new(&self.program)
            .args(&args)
            .current_dir(working_dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|error| Error::CommandFailed {
                command: command_line.clone(),
                error,
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let (_, stderr_tail) = tokio::join!(
            async move {
                if let Some(stdout) = stdout {
                    let mut lines = BufReader::new(stdout).lines();
                    while let Ok(Some(line)) = lines.next_line().await {
                        log::info!("{line}");
                    }
                }
            },
            async move {
                let mut tail = VecDeque::with_capacity(STDERR_TAIL_LINES);
                if let Some(stderr) = stderr {
                    let mut lines = BufReader::new(stderr).lines();
                    while let Ok(Some(line)) = lines.next_line().await {
                        log::warn!("{line}");
                        if tail.len() == STDERR_TAIL_LINES {
                            tail.pop_front();
                        }
                        tail.push_back(line);
                    }
                }
                tail
            }
        );

        let status = child.wait().await.map_err(|error| Error::CommandFailed {
            command: command_line.clone(),
            error,
        })?;

        if !status.success() {
            return Err(Error::ToolFailed {
                command: command_line,
                code: status.code(),
                stderr: Vec::from(stderr_tail).join("\n"),
            });
        }
        Ok(())
    }
}

impl BuildGenerator for CMake {
    async fn configure(&mut self, build: &ConfiguredBuild) -> Result<()> {
        build.layout().ensure_build_folder().await?;
        let args = self.configure_args(build);
        self.run(args, build.layout().build_folder()).await
    }

    async fn build(&mut self, build: &ConfiguredBuild, target: Option<&str>) -> Result<()> {
        let args = self.build_args(build, target);
        self.run(args, build.layout().build_folder()).await
    }

    async fn install(&mut self, build: &ConfiguredBuild) -> Result<()> {
        build.layout().ensure_package_folder().await?;
        let args = self.install_args(build);
        self.run(args, build.layout().build_folder()).await
    }
}
