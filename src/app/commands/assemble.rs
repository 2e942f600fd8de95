//! Assembly orchestration: validate the descriptor, then install and generate.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::adapters::layout_for;
use crate::app::AppContext;
use crate::domain::{
    AppError, Artifact, AssemblyConfig, BIN_DIR, Daemon, LayoutKind, Platform, PlatformSet,
    ResolvedProgram, TargetRepository, all_platforms, assemble_classpath, resolve_platforms,
};
use crate::ports::{ArtifactInstaller, ScriptRenderer};

/// Outcome of a validated assembly, ready to execute.
///
/// Execution consumes the value, so one validation drives at most one run.
#[derive(Debug, Clone)]
pub struct ValidatedAssembly {
    assemble_directory: PathBuf,
    layout: LayoutKind,
    include_configuration_directory: bool,
    extra_jvm_arguments: Option<String>,
    default_platforms: PlatformSet,
    project: Artifact,
    artifacts: Vec<Artifact>,
    programs: Vec<ResolvedProgram>,
}

/// One launcher the run will generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedScript {
    pub program: String,
    pub platform: Platform,
    pub daemon: Daemon,
}

/// What an executed assembly produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssemblyReport {
    /// Installed artifact locations, in installation order.
    pub installed: Vec<PathBuf>,
    /// Generated launcher scripts, in generation order.
    pub scripts: Vec<PathBuf>,
}

/// Validate an assembly descriptor without touching the filesystem.
///
/// Checks the repository layout, the run-wide platforms, and every program,
/// returning the normalized configuration.
pub fn validate(config: AssemblyConfig) -> Result<ValidatedAssembly, AppError> {
    let layout = LayoutKind::parse(config.repository_layout.as_deref())?;

    let default_platforms = resolve_platforms(config.platforms.as_deref(), &all_platforms())?;
    if default_platforms.is_empty() {
        warn!("no default platforms configured; programs without platforms get no launchers");
    }

    let mut programs: Vec<ResolvedProgram> = Vec::with_capacity(config.programs.len());
    for program in &config.programs {
        let resolved = program.resolve(&default_platforms)?;
        if programs.iter().any(|p| p.name == resolved.name) {
            return Err(AppError::config_error(format!(
                "Duplicate program name '{}' in Program configuration",
                resolved.name
            )));
        }
        programs.push(resolved);
    }

    Ok(ValidatedAssembly {
        assemble_directory: config.assemble_directory,
        layout,
        include_configuration_directory: config.include_configuration_directory_in_classpath,
        extra_jvm_arguments: config.extra_jvm_arguments,
        default_platforms,
        project: config.project,
        artifacts: config.artifacts,
        programs,
    })
}

impl ValidatedAssembly {
    pub fn assemble_directory(&self) -> &Path {
        &self.assemble_directory
    }

    pub fn layout(&self) -> LayoutKind {
        self.layout
    }

    pub fn default_platforms(&self) -> &PlatformSet {
        &self.default_platforms
    }

    pub fn programs(&self) -> &[ResolvedProgram] {
        &self.programs
    }

    /// Build the daemon for a validated program.
    ///
    /// Program-level JVM arguments take precedence over the run-wide ones.
    pub fn daemon_for(&self, program: &ResolvedProgram) -> Daemon {
        let classpath = assemble_classpath(
            &self.artifacts,
            &self.project,
            self.include_configuration_directory,
            layout_for(self.layout),
        );
        let extra_arguments =
            program.extra_jvm_arguments.as_deref().or(self.extra_jvm_arguments.as_deref());
        Daemon::build(program, classpath, extra_arguments)
    }

    /// Every (program, platform) launcher in generation order.
    pub fn plan(&self) -> Vec<PlannedScript> {
        self.programs
            .iter()
            .flat_map(|program| {
                let daemon = self.daemon_for(program);
                program.platforms.iter().map(move |&platform| PlannedScript {
                    program: program.name.clone(),
                    platform,
                    daemon: daemon.clone(),
                })
            })
            .collect()
    }

    /// Install artifacts, prepare the working area, and render every launcher.
    ///
    /// The first failure aborts the run; files written before it stay on disk.
    pub fn execute<I, R>(self, ctx: &AppContext<I, R>) -> Result<AssemblyReport, AppError>
    where
        I: ArtifactInstaller,
        R: ScriptRenderer,
    {
        let mut report = AssemblyReport::default();

        let repository = TargetRepository::under(&self.assemble_directory, self.layout);
        info!(
            repository = %repository.root.display(),
            layout = layout_for(self.layout).name(),
            "installing artifacts"
        );
        for artifact in self.artifacts.iter().chain(std::iter::once(&self.project)) {
            let installed = ctx
                .installer()
                .install(&artifact.file, artifact, &repository)
                .map_err(|err| installation_error(artifact, err))?;
            report.installed.push(installed);
        }

        set_up_working_area(&self.assemble_directory)?;

        for program in &self.programs {
            for &platform in &program.platforms {
                let daemon = self.daemon_for(program);
                let script = ctx
                    .renderer()
                    .render(platform, &daemon, &self.assemble_directory)
                    .map_err(|err| AppError::Generation {
                        program: program.name.clone(),
                        platform,
                        reason: err.to_string(),
                    })?;
                debug!(program = %program.name, %platform, script = %script.display(), "generated");
                report.scripts.push(script);
            }
        }

        info!(
            artifacts = report.installed.len(),
            scripts = report.scripts.len(),
            "assembly complete"
        );
        Ok(report)
    }
}

fn installation_error(artifact: &Artifact, err: AppError) -> AppError {
    match err {
        err @ AppError::Installation { .. } => err,
        other => AppError::Installation {
            artifact: artifact.coordinates.to_string(),
            reason: other.to_string(),
        },
    }
}

/// Make sure the directory for launcher scripts exists.
fn set_up_working_area(assemble_directory: &Path) -> Result<(), AppError> {
    let bin_dir = assemble_directory.join(BIN_DIR);
    if bin_dir.is_dir() {
        return Ok(());
    }
    match fs::create_dir_all(&bin_dir) {
        Ok(()) => Ok(()),
        Err(_) if bin_dir.is_dir() => Ok(()),
        Err(source) => Err(AppError::ResourceSetup { path: bin_dir, source }),
    }
}

/// Validate and execute in one step.
pub fn execute<I, R>(
    config: AssemblyConfig,
    ctx: &AppContext<I, R>,
) -> Result<AssemblyReport, AppError>
where
    I: ArtifactInstaller,
    R: ScriptRenderer,
{
    validate(config)?.execute(ctx)
}
