use clap::Parser;
use slide_access::args::Args;
use slide_access::config::Config;
use slide_access::options::OutputFormat;
use slide_access::presentation::write_report;
use slide_access_domain::{DenialKind, RuleCategory, Slide};
use slide_access_infra::ConsoleDiagnostics;
use slide_access_usecase::{CheckAccessInput, SlideAccessChecker};

use crate::common::builders::VisitorBuilder;

#[test]
fn mixed_queue_against_both_slides() {
    let input = CheckAccessInput {
        slides: vec![
            Slide::new("Splash", RuleCategory::Children),
            Slide::new("Drop Tower", RuleCategory::Adult),
        ],
        visitors: vec![
            VisitorBuilder::child("Ann").build(),
            VisitorBuilder::adult("Kate").build(),
            VisitorBuilder::child("Zed").height(80).weight(20).age(4).build(),
            VisitorBuilder::adult("Old").age(61).build(),
        ],
    };

    let sink = ConsoleDiagnostics::new(Vec::new());
    let report = SlideAccessChecker::new(&sink).run(&input).expect("run succeeds");

    let granted: Vec<_> = report
        .outcomes
        .iter()
        .filter(|o| o.granted)
        .map(|o| (o.slide.as_str(), o.visitor.as_str()))
        .collect();
    assert_eq!(granted, vec![("Splash", "Ann"), ("Splash", "Zed"), ("Drop Tower", "Kate")]);

    let denied_kinds: Vec<_> = report.outcomes.iter().filter_map(|o| o.kind).collect();
    assert!(denied_kinds.iter().all(|k| *k == DenialKind::RequirementsNotMet));

    let printed = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(printed.lines().count(), report.denied());
    assert!(printed.contains("Old can't access, doesn't meet the requirements! age must be between 14 and 60, got 61"));
}

#[test]
fn cli_arguments_drive_the_same_checks() {
    let args = Args::try_parse_from([
        "slide_access",
        "--slide",
        "Splash=kids",
        "--visitor",
        "name=Ann,age=10,weight=30,height=100",
        "--visitor",
        "name=Max,age=10,weight=thirty,height=100",
        "--format",
        "jsonl",
    ])
    .unwrap();
    let config = Config::from(args);

    let sink = ConsoleDiagnostics::new(Vec::new());
    let report = SlideAccessChecker::new(&sink).run(&config.input()).unwrap();
    assert_eq!(report.outcomes[1].kind, Some(DenialKind::IncorrectType));

    let mut out = Vec::new();
    write_report(&mut out, &report, OutputFormat::Jsonl).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.contains(r#""reason":"expected an integer for `weight`, got str""#));
}
