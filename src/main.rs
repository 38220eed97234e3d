// SPDX-FileCopyrightText: 2026 Guidepost Contributors
// SPDX-License-Identifier: MIT

//! Guidepost CLI entrypoint.
//!
//! By default this runs the interactive TUI with the built-in demo blog tour.
//! Pass a tour configuration document to run your own tour instead.

use std::error::Error;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--state <dir>] [--skin <name>] [--demo]\n  {program} [--state <dir>] [--skin <name>] [--config] <tour.json>\n\nWithout a tour document the built-in demo tour is used; --demo makes that\nexplicit and cannot be combined with a tour document.\n\n--state selects the directory holding the persisted tour cursor (defaults\nto the current working directory).\n\n--skin overrides the tour's initial skin (`default` or `dark`)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    config: Option<String>,
    state_dir: Option<String>,
    skin: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.config = Some(path);
            }
            "--state" => {
                if options.state_dir.is_some() {
                    return Err(());
                }
                let dir = args.next().ok_or(())?;
                options.state_dir = Some(dir);
            }
            "--skin" => {
                if options.skin.is_some() {
                    return Err(());
                }
                let name = args.next().ok_or(())?;
                options.skin = Some(name);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(arg);
            }
        }
    }

    if options.demo && options.config.is_some() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "guidepost".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();

        let state_dir = options.state_dir.unwrap_or_else(|| ".".to_owned());
        let store = guidepost::store::CursorStore::new(state_dir);
        let skin = options.skin.as_deref().map(guidepost::model::Skin::from_name);

        let (mut config, overlays) = if let Some(path) = options.config {
            let raw = std::fs::read_to_string(&path)?;
            let document: guidepost::model::TourConfigFile = serde_json::from_str(&raw)?;
            (document.into_config()?, guidepost::overlay::OverlayConfig::new())
        } else {
            (guidepost::tui::demo_tour()?, guidepost::tui::demo_overlays()?)
        };
        if let Some(skin) = skin {
            config = config.with_skin(skin);
        }
        guidepost::tui::run(config, overlays, store)?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("guidepost: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn parses_demo_flag() {
        let options = parse_options(["--demo".to_owned()].into_iter()).expect("parse options");
        assert!(options.demo);
        assert!(options.config.is_none());
        assert!(options.state_dir.is_none());
    }

    #[test]
    fn parses_config_flag() {
        let options = parse_options(["--config".to_owned(), "tour.json".to_owned()].into_iter())
            .expect("parse options");
        assert_eq!(options.config.as_deref(), Some("tour.json"));
        assert!(!options.demo);
    }

    #[test]
    fn parses_positional_config() {
        let options = parse_options(["tour.json".to_owned()].into_iter()).expect("parse options");
        assert_eq!(options.config.as_deref(), Some("tour.json"));
    }

    #[test]
    fn parses_state_dir() {
        let options = parse_options(["--state".to_owned(), "some/dir".to_owned()].into_iter())
            .expect("parse options");
        assert_eq!(options.state_dir.as_deref(), Some("some/dir"));
    }

    #[test]
    fn rejects_demo_with_config() {
        parse_options(["--demo".to_owned(), "tour.json".to_owned()].into_iter()).unwrap_err();
        parse_options(
            ["--config".to_owned(), "tour.json".to_owned(), "--demo".to_owned()].into_iter(),
        )
        .unwrap_err();
    }

    #[test]
    fn rejects_duplicate_config() {
        parse_options(["a.json".to_owned(), "b.json".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn parses_skin_override() {
        let options = parse_options(["--skin".to_owned(), "dark".to_owned()].into_iter())
            .expect("parse options");
        assert_eq!(options.skin.as_deref(), Some("dark"));
    }

    #[test]
    fn rejects_missing_flag_value() {
        parse_options(["--state".to_owned()].into_iter()).unwrap_err();
        parse_options(["--config".to_owned()].into_iter()).unwrap_err();
        parse_options(["--skin".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_unknown_flag() {
        parse_options(["--wat".to_owned()].into_iter()).unwrap_err();
    }
}
