//! Tests for log level functionality.

use framelog::{Error, Level, ParseLevelError};

#[test]
fn level_ordering() {
    assert!(Level::Verbose < Level::Debug);
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warn);
    assert!(Level::Warn < Level::Error);
    assert!(Level::Error < Level::Assert);
}

#[test]
fn level_priorities() {
    let priorities: Vec<u8> = Level::all().iter().map(|l| l.priority()).collect();
    assert_eq!(priorities, vec![2, 3, 4, 5, 6, 7]);

    for level in Level::all() {
        assert_eq!(Level::from_priority(level.priority()), level);
    }
}

#[test]
fn level_from_unknown_priority_is_verbose() {
    assert_eq!(Level::from_priority(0), Level::Verbose);
    assert_eq!(Level::from_priority(42), Level::Verbose);
}

#[test]
fn level_letters() {
    let letters: String = Level::all().iter().map(|l| l.letter()).collect();
    assert_eq!(letters, "VDIWEA");
}

#[test]
fn level_display() {
    assert_eq!(Level::Verbose.to_string(), "verbose");
    assert_eq!(Level::Debug.to_string(), "debug");
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Error.to_string(), "error");
    assert_eq!(Level::Assert.to_string(), "assert");
}

#[test]
fn level_from_str() {
    assert_eq!("verbose".parse::<Level>().unwrap(), Level::Verbose);
    assert_eq!("trace".parse::<Level>().unwrap(), Level::Verbose);
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("wtf".parse::<Level>().unwrap(), Level::Assert);
}

#[test]
fn level_from_str_invalid() {
    let err: ParseLevelError = "loud".parse::<Level>().unwrap_err();
    assert_eq!(err.to_string(), "unknown log level: 'loud'");

    let err: Error = err.into();
    assert!(matches!(err, Error::InvalidLevel(ref s) if s == "loud"));
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Verbose);
}
