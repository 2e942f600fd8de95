//! Launcher script renderer backed by embedded minijinja templates.

use std::fs;
use std::path::{Path, PathBuf};

use include_dir::{Dir, include_dir};
use minijinja::{Environment, context};
use tracing::debug;

use crate::domain::{AppError, BIN_DIR, ClasspathEntry, Daemon, Platform};
use crate::ports::ScriptRenderer;

static SCRIPT_TEMPLATES: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/scripts");

/// Per-platform rendering rules.
struct Dialect {
    template: &'static str,
    file_suffix: &'static str,
    classpath_separator: &'static str,
    path_separator: char,
    base_dir: &'static str,
    repo_dir: &'static str,
    line_ending: &'static str,
    quote: fn(&str) -> String,
}

const UNIX: Dialect = Dialect {
    template: "unix.sh.j2",
    file_suffix: "",
    classpath_separator: ":",
    path_separator: '/',
    base_dir: "\"$BASEDIR\"",
    repo_dir: "\"$REPO\"",
    line_ending: "\n",
    quote: quote_unix,
};

const WINDOWS: Dialect = Dialect {
    template: "windows.bat.j2",
    file_suffix: ".bat",
    classpath_separator: ";",
    path_separator: '\\',
    base_dir: "\"%BASEDIR%\"",
    repo_dir: "\"%REPO%\"",
    line_ending: "\r\n",
    quote: quote_windows,
};

fn dialect(platform: Platform) -> &'static Dialect {
    match platform {
        Platform::Unix => &UNIX,
        Platform::Windows => &WINDOWS,
    }
}

/// Renders launcher scripts into `<target>/bin/`.
pub struct MinijinjaScriptRenderer {
    env: Environment<'static>,
    bin_prefix: String,
}

impl MinijinjaScriptRenderer {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);

        for name in [UNIX.template, WINDOWS.template] {
            let source = SCRIPT_TEMPLATES
                .get_file(name)
                .and_then(|file| file.contents_utf8())
                .ok_or_else(|| AppError::Template {
                    name: name.to_string(),
                    details: "missing embedded template".into(),
                })?;
            env.add_template(name, source).map_err(|e| AppError::Template {
                name: name.to_string(),
                details: e.to_string(),
            })?;
        }

        Ok(Self { env, bin_prefix: String::new() })
    }

    /// Prefix every generated file name.
    pub fn with_bin_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.bin_prefix = prefix.into();
        self
    }

    /// File name of the launcher for `daemon` on `platform`.
    pub fn script_name(&self, platform: Platform, daemon: &Daemon) -> String {
        format!("{}{}{}", self.bin_prefix, daemon.id, dialect(platform).file_suffix)
    }

    /// Render the launcher text without writing it.
    pub fn render_to_string(&self, platform: Platform, daemon: &Daemon) -> Result<String, AppError> {
        let dialect = dialect(platform);
        let template_error = |e: minijinja::Error| AppError::Template {
            name: dialect.template.to_string(),
            details: e.to_string(),
        };

        let classpath = daemon
            .classpath
            .iter()
            .map(|entry| classpath_element(dialect, entry))
            .collect::<Vec<_>>()
            .join(dialect.classpath_separator);
        let jvm_arguments: Vec<String> =
            daemon.jvm_settings.extra_arguments.iter().map(|arg| (dialect.quote)(arg)).collect();

        let rendered = self
            .env
            .get_template(dialect.template)
            .map_err(template_error)?
            .render(context! {
                id => daemon.id,
                main_class => (dialect.quote)(&daemon.main_class),
                classpath => classpath,
                jvm_arguments => jvm_arguments,
            })
            .map_err(template_error)?;

        Ok(match dialect.line_ending {
            "\n" => rendered,
            ending => rendered.replace('\n', ending),
        })
    }
}

impl ScriptRenderer for MinijinjaScriptRenderer {
    fn render(
        &self,
        platform: Platform,
        daemon: &Daemon,
        target_directory: &Path,
    ) -> Result<PathBuf, AppError> {
        let content = self.render_to_string(platform, daemon)?;
        let path = target_directory.join(BIN_DIR).join(self.script_name(platform, daemon));
        fs::write(&path, content)?;

        #[cfg(unix)]
        if platform == Platform::Unix {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&path, perms)?;
        }

        debug!(script = %path.display(), %platform, "rendered launcher");
        Ok(path)
    }
}

fn classpath_element(dialect: &Dialect, entry: &ClasspathEntry) -> String {
    let root = match entry {
        ClasspathEntry::Directory { .. } => dialect.base_dir,
        ClasspathEntry::Dependency { .. } => dialect.repo_dir,
    };
    let relative: String = entry
        .relative_path()
        .chars()
        .map(|c| if c == '/' { dialect.path_separator } else { c })
        .collect();
    format!("{}{}{}", root, dialect.path_separator, relative)
}

fn quote_unix(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg.chars().all(|c| c.is_ascii_alphanumeric() || "@%+=:,./_-".contains(c));
    if safe { arg.to_string() } else { format!("'{}'", arg.replace('\'', "'\\''")) }
}

fn quote_windows(arg: &str) -> String {
    let needs_quotes = arg.is_empty() || arg.contains([' ', '\t', '&', '|', '<', '>', '^']);
    if needs_quotes { format!("\"{}\"", arg.replace('"', "\"\"")) } else { arg.to_string() }
}
