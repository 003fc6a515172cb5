use std::{path::PathBuf, rc::Rc, sync::{atomic::{AtomicUsize, Ordering}, Arc, RwLock}};

use termcolor::Buffer;

use crate::parser::error::Warning as CompileWarning;
use super::diagnostic::{Diagnostic, Label, Level, Location};

pub trait WarningEmitterIO {
    fn emit_warning(&self, warning: Warning);
}

#[derive(Debug, Clone, Copy)]
pub struct NullWarningEmitterIO;

impl WarningEmitterIO for NullWarningEmitterIO {
    fn emit_warning(&self, _warning: Warning) {}
}

/// Collects warnings in memory instead of printing them.
#[derive(Debug, Default, Clone)]
pub struct VectorWarningEmitterIO {
    pub warnings: Arc<RwLock<Vec<Warning>>>
}

impl VectorWarningEmitterIO {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Warning> {
        let mut warnings = self.write_lock();
        std::mem::take(&mut *warnings)
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Warning>> {
        self.warnings.write().expect("Vector lock poisoned")
    }
}

impl WarningEmitterIO for VectorWarningEmitterIO {
    fn emit_warning(&self, warning: Warning) {
        let mut warnings = self.write_lock();

        warnings.push(warning);
    }
}

pub struct WarningEmitter {
    count: Arc<AtomicUsize>,
    emitter: Rc<dyn WarningEmitterIO>
}

impl WarningEmitter {
    pub fn new(emitter: Rc<dyn WarningEmitterIO>) -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            emitter,
        }
    }

    pub fn null() -> Self {
        Self::new(Rc::new(NullWarningEmitterIO))
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    pub fn emit(&self, warning: Warning) {
        _ = self.count.fetch_add(1, Ordering::Relaxed);
        self.emitter.emit_warning(warning);
    }
}

/// Attaches the source of one module to the warnings raised while
/// compiling it.
pub struct SourceWarningEmitter {
    module_path: PathBuf,
    module_src: String,
    emitter: WarningEmitter,
}

impl SourceWarningEmitter {
    pub fn new(
        module_path: PathBuf,
        module_src: String,
        emitter: WarningEmitter
    ) -> Self {
        Self {
            module_path,
            module_src,
            emitter,
        }
    }

    pub fn emit(&self, warning: CompileWarning) {
        self.emitter.emit(Warning::Compile {
            path: self.module_path.clone(),
            src: self.module_src.clone(),
            warning,
        });
    }

    pub fn count(&self) -> usize {
        self.emitter.count()
    }
}

#[derive(Debug, Clone)]
pub enum Warning {
    Compile {
        path: PathBuf,
        src: String,
        warning: CompileWarning
    }
}

impl Warning {
    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();
        self.pretty(&mut nocolor);
        String::from_utf8(nocolor.into_inner()).expect("Error printing produced invalid utf8")
    }

    pub fn pretty(&self, buf: &mut Buffer) {
        use std::io::Write;

        self.to_diagnostic().write(buf);
        buf.write_all(b"\n")
            .expect("error pretty buffer write space after");
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let Warning::Compile { path, src, warning } = self;

        let (title, label) = match warning {
            CompileWarning::UnusedVariable { variable, .. } => (
                format!("Unused variable `{variable}`"),
                Some("This variable is never assigned".to_string()),
            ),
            CompileWarning::UnterminatedComment { .. } => (
                "Unterminated comment".to_string(),
                Some("Everything after this `{` is ignored".to_string()),
            ),
            CompileWarning::UnreachableCode { .. } => (
                "Unreachable code".to_string(),
                Some("Source after the final `.` is ignored".to_string()),
            ),
        };

        Diagnostic {
            title,
            text: "".into(),
            level: Level::Warning,
            location: Some(Location {
                src,
                path: path.to_path_buf(),
                label: Label {
                    text: label,
                    span: warning.location(),
                },
                extra_labels: vec![]
            }),
        }
    }
}
