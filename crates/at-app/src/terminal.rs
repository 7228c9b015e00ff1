use std::io::IsTerminal;

/// Largeur utilisée quand le terminal ne peut pas être interrogé.
pub const FALLBACK_COLUMNS: u32 = 100;

/// Colonnes du terminal courant.
///
/// `COLUMNS` gagne s'il est valide. Sinon stdout doit être un tty : crossterm
/// retombe sur `tput` hors tty et répondrait 80 au lieu de laisser le repli
/// s'appliquer.
#[must_use]
pub fn detect_columns() -> Option<u32> {
    let env = std::env::var("COLUMNS").ok();
    columns_from(env.as_deref(), std::io::stdout().is_terminal(), || {
        match crossterm::terminal::size() {
            Ok((cols, _)) => Some(u32::from(cols)),
            Err(e) => {
                log::debug!("Taille du terminal indisponible : {e}");
                None
            }
        }
    })
}

/// Combine the `COLUMNS` value, the tty check and the terminal query.
///
/// `query` only runs when `COLUMNS` is absent or invalid and stdout is a tty.
#[must_use]
pub fn columns_from(
    env_columns: Option<&str>,
    is_tty: bool,
    query: impl FnOnce() -> Option<u32>,
) -> Option<u32> {
    let from_env = env_columns
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|&cols| cols > 0);
    if from_env.is_some() {
        return from_env;
    }
    if !is_tty {
        log::debug!("stdout n'est pas un terminal");
        return None;
    }
    query().filter(|&cols| cols > 0)
}

/// Largeur effective : `requested` si non nul, sinon la détection,
/// sinon [`FALLBACK_COLUMNS`].
pub fn resolve_width(requested: u32, detect: impl FnOnce() -> Option<u32>) -> u32 {
    if requested > 0 {
        return requested;
    }
    detect().unwrap_or_else(|| {
        log::warn!("Largeur du terminal inconnue, repli sur {FALLBACK_COLUMNS} colonnes.");
        FALLBACK_COLUMNS
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_width_skips_detection() {
        let width = resolve_width(42, || panic!("detection should not run"));
        assert_eq!(width, 42);
    }

    #[test]
    fn zero_uses_detected_columns() {
        assert_eq!(resolve_width(0, || Some(132)), 132);
    }

    #[test]
    fn failed_detection_falls_back() {
        assert_eq!(resolve_width(0, || None), FALLBACK_COLUMNS);
    }

    #[test]
    fn not_a_tty_skips_query_and_falls_back() {
        // tput répondrait 80 ici
        let cols = columns_from(None, false, || Some(80));
        assert_eq!(cols, None);
        assert_eq!(resolve_width(0, || cols), FALLBACK_COLUMNS);
    }

    #[test]
    fn columns_env_wins() {
        assert_eq!(columns_from(Some("57"), false, || Some(80)), Some(57));
        assert_eq!(columns_from(Some(" 120 "), true, || Some(80)), Some(120));
    }

    #[test]
    fn invalid_columns_env_is_ignored() {
        assert_eq!(columns_from(Some("wide"), true, || Some(90)), Some(90));
        assert_eq!(columns_from(Some("0"), true, || Some(90)), Some(90));
        assert_eq!(columns_from(Some("-3"), false, || Some(90)), None);
    }

    #[test]
    fn zero_sized_terminal_is_unknown() {
        assert_eq!(columns_from(None, true, || Some(0)), None);
    }

    #[test]
    fn piped_stdout_without_columns_falls_back() {
        // Only meaningful when the test harness itself is piped.
        if std::io::stdout().is_terminal() || std::env::var_os("COLUMNS").is_some() {
            return;
        }
        assert_eq!(detect_columns(), None);
        assert_eq!(resolve_width(0, detect_columns), FALLBACK_COLUMNS);
    }
}
