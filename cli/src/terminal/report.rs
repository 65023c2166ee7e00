use std::time::Duration;

use colored::*;
use scopehunter_common::config::Config;
use scopehunter_common::report::Report;
use scopehunter_common::verdict::Verdict;

use crate::terminal::{colors, print};

pub fn render(report: &Report, elapsed: Duration, cfg: &Config) {
    if cfg.quiet > 1 {
        for line in report.problem_lines() {
            print::print(&line);
        }
        return;
    }

    print::blank();
    print::fat_separator();

    if report.is_clean() {
        print::blank();
        print::print(&format!(
            "{}",
            "[OK] Perfect! All subnets are accessible.".color(colors::ACCESSIBLE).bold()
        ));
    } else {
        print_problems(report);
    }

    print_empty(report);

    if cfg.quiet == 0 && report.total() > report.count(Verdict::Accessible) {
        print_legend();
    }

    print::blank();
    print::centerln(&format!(
        "Checked {} subnets in {}",
        report.total().to_string().bold(),
        format!("{:.2}s", elapsed.as_secs_f64()).bold().yellow()
    ));
    print::fat_separator();
}

fn print_problems(report: &Report) {
    let count = report.problem_count();
    print::blank();
    print::print(&format!(
        "{}",
        format!("[!] PROBLEM SUBNETS ({count}):").color(colors::PROBLEM).bold()
    ));
    print::print(&format!("{}", "(Copy list below for client)".color(colors::MUTED)));
    print::blank();
    for line in report.problem_lines() {
        print::print(&format!("  - {line}"));
    }
    print::blank();
    print::print(&format!(
        "{}",
        format!(
            "Total: {count} / {} subnets have problems.",
            report.total()
        )
        .color(colors::MUTED)
    ));
}

fn print_empty(report: &Report) {
    let empty: Vec<String> = report
        .empty_but_reachable()
        .map(|e| e.subnet.to_string())
        .collect();
    if empty.is_empty() {
        return;
    }

    print::blank();
    print::print(&format!(
        "{}",
        format!("[~] EMPTY BUT REACHABLE ({}):", empty.len())
            .color(colors::EMPTY)
            .bold()
    ));
    for subnet in empty {
        print::print(&format!("  - {subnet}"));
    }
}

fn print_legend() {
    let width = Verdict::ALL
        .iter()
        .map(|v| v.tag().len())
        .max()
        .unwrap_or_default();

    print::blank();
    print::header("legend", 0);
    for verdict in Verdict::ALL {
        print::aligned_line(
            verdict.tag(),
            verdict.description().color(colors::TEXT_DEFAULT),
            width,
        );
    }
}
