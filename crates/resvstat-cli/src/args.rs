use clap::Parser;
use resvstat_types::DisplayMode;

const MODE_FLAGS: [&str; 4] = ["full", "full_verbose", "brief", "short"];

/// The mode flags mirror getopt semantics: mutually exclusive, and the
/// last one given wins when several appear.
#[derive(Parser)]
#[command(name = "resvstat")]
#[command(about = "Show the status of scheduler reservations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Full listing: every attribute of each reservation
    #[arg(short = 'f', overrides_with_all = MODE_FLAGS)]
    pub full: bool,

    /// Same as -f
    #[arg(short = 'F', overrides_with_all = MODE_FLAGS)]
    pub full_verbose: bool,

    /// Brief listing: reservation identifiers only
    #[arg(short = 'B', overrides_with_all = MODE_FLAGS)]
    pub brief: bool,

    /// Short one-line summary per reservation (the default)
    #[arg(short = 'S', overrides_with_all = MODE_FLAGS)]
    pub short: bool,

    /// Reservation identifiers (`name[@server]`), or `@server` for every
    /// reservation at that server; none means all reservations at the
    /// default server
    pub targets: Vec<String>,
}

impl Cli {
    pub fn display_mode(&self) -> DisplayMode {
        if self.full || self.full_verbose {
            DisplayMode::Full
        } else if self.brief {
            DisplayMode::NamesOnly
        } else {
            DisplayMode::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("parse")
    }

    #[test]
    fn default_mode_without_flags() {
        assert_eq!(parse(&["resvstat"]).display_mode(), DisplayMode::Default);
        assert_eq!(
            parse(&["resvstat", "-S"]).display_mode(),
            DisplayMode::Default
        );
    }

    #[test]
    fn mode_flags_select_modes() {
        assert_eq!(parse(&["resvstat", "-f"]).display_mode(), DisplayMode::Full);
        assert_eq!(parse(&["resvstat", "-F"]).display_mode(), DisplayMode::Full);
        assert_eq!(
            parse(&["resvstat", "-B"]).display_mode(),
            DisplayMode::NamesOnly
        );
    }

    #[test]
    fn last_mode_flag_wins() {
        assert_eq!(
            parse(&["resvstat", "-f", "-B"]).display_mode(),
            DisplayMode::NamesOnly
        );
        assert_eq!(
            parse(&["resvstat", "-B", "-S", "-f"]).display_mode(),
            DisplayMode::Full
        );
        assert_eq!(
            parse(&["resvstat", "-f", "-f"]).display_mode(),
            DisplayMode::Full
        );
    }

    #[test]
    fn positional_targets_are_collected_in_order() {
        let cli = parse(&["resvstat", "-B", "R1", "R2@backup", "@central"]);
        assert_eq!(cli.targets, vec!["R1", "R2@backup", "@central"]);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["resvstat", "-x"]).is_err());
    }
}
