//! Font loading for the document text.
//!
//! When Liberation Sans or Arial is found, the document is drawn with the PDF standard Helvetica
//! font and the TrueType files only supply glyph metrics, so no font program ends up in the
//! output.  Any other family has different widths and is embedded instead, so that `genpdf`
//! measures and draws with the same glyphs.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::Error;
use genpdf::fonts::{FontData, FontFamily};
use log::{debug, info, warn};
use printpdf::BuiltinFont;

/// Environment variable naming an additional directory searched first for font files.
pub const FONTS_DIR_ENV: &str = "CHRONOGRID_FONTS_DIR";

/// File names making up one complete font family on disk.
#[derive(Clone, Copy, Debug)]
struct FontFiles {
    family: &'static str,
    helvetica_metrics: bool,
    regular: &'static str,
    bold: &'static str,
    italic: &'static str,
    bold_italic: &'static str,
}

impl FontFiles {
    fn names(&self) -> [&'static str; 4] {
        [self.regular, self.bold, self.italic, self.bold_italic]
    }

    fn builtin(&self, builtin: BuiltinFont) -> Option<BuiltinFont> {
        self.helvetica_metrics.then_some(builtin)
    }

    fn missing_in(&self, directory: &Path) -> Vec<&'static str> {
        self.names()
            .into_iter()
            .filter(|name| !directory.join(name).is_file())
            .collect()
    }
}

const LIBERATION_SANS: FontFiles = FontFiles {
    family: "Liberation Sans",
    helvetica_metrics: true,
    regular: "LiberationSans-Regular.ttf",
    bold: "LiberationSans-Bold.ttf",
    italic: "LiberationSans-Italic.ttf",
    bold_italic: "LiberationSans-BoldItalic.ttf",
};

const ARIAL_WINDOWS: FontFiles = FontFiles {
    family: "Arial",
    helvetica_metrics: true,
    regular: "arial.ttf",
    bold: "arialbd.ttf",
    italic: "ariali.ttf",
    bold_italic: "arialbi.ttf",
};

const ARIAL_MACOS: FontFiles = FontFiles {
    family: "Arial",
    helvetica_metrics: true,
    regular: "Arial.ttf",
    bold: "Arial Bold.ttf",
    italic: "Arial Italic.ttf",
    bold_italic: "Arial Bold Italic.ttf",
};

const ROBOTO: FontFiles = FontFiles {
    family: "Roboto",
    helvetica_metrics: false,
    regular: "Roboto-Regular.ttf",
    bold: "Roboto-Bold.ttf",
    italic: "Roboto-Italic.ttf",
    bold_italic: "Roboto-BoldItalic.ttf",
};

const DEJAVU_SANS: FontFiles = FontFiles {
    family: "DejaVu Sans",
    helvetica_metrics: false,
    regular: "DejaVuSans.ttf",
    bold: "DejaVuSans-Bold.ttf",
    italic: "DejaVuSans-Oblique.ttf",
    bold_italic: "DejaVuSans-BoldOblique.ttf",
};

/// Families accepted in user supplied and bundled directories, closest Helvetica metrics first.
const ANY_FAMILY: &[FontFiles] = &[
    LIBERATION_SANS,
    ARIAL_WINDOWS,
    ARIAL_MACOS,
    ROBOTO,
    DEJAVU_SANS,
];

const SYSTEM_LOCATIONS: &[(&str, FontFiles)] = &[
    ("/usr/share/fonts/truetype/liberation", LIBERATION_SANS),
    ("/usr/share/fonts/truetype/liberation2", LIBERATION_SANS),
    ("/usr/share/fonts/liberation-sans", LIBERATION_SANS),
    ("/usr/share/fonts/liberation", LIBERATION_SANS),
    ("/usr/share/fonts/TTF", LIBERATION_SANS),
    ("/Library/Fonts", ARIAL_MACOS),
    ("/System/Library/Fonts/Supplemental", ARIAL_MACOS),
    ("/usr/share/fonts/truetype/dejavu", DEJAVU_SANS),
    ("/usr/share/fonts/dejavu-sans-fonts", DEJAVU_SANS),
    ("/usr/share/fonts/dejavu", DEJAVU_SANS),
    ("/usr/share/fonts/TTF", DEJAVU_SANS),
];

/// Where a candidate directory came from, used for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Origin {
    Override,
    Bundled,
    System,
}

struct Candidate {
    directory: PathBuf,
    files: FontFiles,
    origin: Origin,
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var).and_then(|value| {
        let path = PathBuf::from(value);
        if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        }
    })
}

fn push_directory(candidates: &mut Vec<Candidate>, directory: PathBuf, origin: Origin) {
    if candidates.iter().any(|existing| existing.directory == directory) {
        return;
    }
    for files in ANY_FAMILY {
        candidates.push(Candidate {
            directory: directory.clone(),
            files: *files,
            origin,
        });
    }
}

fn candidates() -> Vec<Candidate> {
    let mut candidates = Vec::new();

    if let Some(path) = env_path(FONTS_DIR_ENV) {
        push_directory(&mut candidates, path, Origin::Override);
    }

    if let Ok(current_exe) = env::current_exe() {
        if let Some(bin_dir) = current_exe.parent() {
            push_directory(&mut candidates, bin_dir.join("assets/fonts"), Origin::Bundled);
        }
    }

    push_directory(&mut candidates, bundled_fonts_source_dir(), Origin::Bundled);

    #[cfg(windows)]
    {
        for var in ["WINDIR", "SystemRoot"] {
            if let Some(root) = env_path(var) {
                candidates.push(Candidate {
                    directory: root.join("Fonts"),
                    files: ARIAL_WINDOWS,
                    origin: Origin::System,
                });
            }
        }
    }

    for (directory, files) in SYSTEM_LOCATIONS {
        candidates.push(Candidate {
            directory: PathBuf::from(*directory),
            files: *files,
            origin: Origin::System,
        });
    }

    candidates
}

/// Returns the `assets/fonts` directory inside the crate sources.
pub fn bundled_fonts_source_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts")
}

/// Message logged when the chosen fonts do not come from the preferred locations.
fn fallback_notice(candidate: &Candidate, override_failed: bool) -> Option<String> {
    match candidate.origin {
        Origin::Override => None,
        Origin::Bundled if !override_failed => None,
        Origin::Bundled => Some(format!(
            "No complete font set in ${}; falling back to {} at {}",
            FONTS_DIR_ENV,
            candidate.files.family,
            candidate.directory.display()
        )),
        Origin::System => Some(format!(
            "No bundled fonts found; falling back to system {} at {}",
            candidate.files.family,
            candidate.directory.display()
        )),
    }
}

fn select_candidate(candidates: Vec<Candidate>) -> Result<Candidate, Error> {
    let mut attempts = Vec::new();
    let mut override_failed = false;

    for candidate in candidates {
        let reason = if !candidate.directory.is_dir() {
            "directory missing".to_owned()
        } else {
            let missing = candidate.files.missing_in(&candidate.directory);
            if missing.is_empty() {
                if let Some(notice) = fallback_notice(&candidate, override_failed) {
                    warn!("{}", notice);
                }
                return Ok(candidate);
            }
            format!("{} missing [{}]", candidate.files.family, missing.join(", "))
        };

        debug!("Skipping font candidate {}: {}", candidate.directory.display(), reason);
        if candidate.origin == Origin::Override {
            override_failed = true;
        }
        attempts.push(format!("{} ({})", candidate.directory.display(), reason));
    }

    attempts.dedup();
    let summary = if attempts.is_empty() {
        "no search paths were available".to_owned()
    } else {
        attempts.join(", ")
    };

    Err(Error::new(
        format!(
            "Unable to locate document fonts. Checked: {}. See assets/fonts/README.md or set {}.",
            summary, FONTS_DIR_ENV
        ),
        io::Error::new(io::ErrorKind::NotFound, "font files not found"),
    ))
}

fn resolve_candidate() -> Result<Candidate, Error> {
    select_candidate(candidates())
}

fn load_face(
    directory: &Path,
    file: &str,
    builtin: Option<BuiltinFont>,
) -> Result<FontData, Error> {
    let path = directory.join(file);
    FontData::load(&path, builtin).map_err(|err| {
        Error::new(
            format!("Failed to load font from {}: {}", path.display(), err),
            io::Error::new(io::ErrorKind::Other, err.to_string()),
        )
    })
}

fn load_family(candidate: &Candidate) -> Result<FontFamily<FontData>, Error> {
    let directory = &candidate.directory;
    let files = candidate.files;

    if files.helvetica_metrics {
        info!(
            "Using {} metrics from {} for builtin Helvetica",
            files.family,
            directory.display()
        );
    } else {
        info!("Embedding {} from {}", files.family, directory.display());
    }

    Ok(FontFamily {
        regular: load_face(directory, files.regular, files.builtin(BuiltinFont::Helvetica))?,
        bold: load_face(directory, files.bold, files.builtin(BuiltinFont::HelveticaBold))?,
        italic: load_face(
            directory,
            files.italic,
            files.builtin(BuiltinFont::HelveticaOblique),
        )?,
        bold_italic: load_face(
            directory,
            files.bold_italic,
            files.builtin(BuiltinFont::HelveticaBoldOblique),
        )?,
    })
}

/// Returns the font family used for the document text.
///
/// Liberation Sans and Arial are mapped onto builtin Helvetica; other families are embedded.
pub fn default_font_family() -> Result<FontFamily<FontData>, Error> {
    load_family(&resolve_candidate()?)
}

/// Indicates whether a complete set of font files can be found.
pub fn fonts_available() -> bool {
    resolve_candidate().is_ok()
}
