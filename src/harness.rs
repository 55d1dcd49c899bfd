use crate::util::human::fmt_seq;
use serde::Serialize;
use std::fmt::Display;

const RULE: &str = "=====================================================================";

/// Outcome of a single expected-vs-actual comparison.
#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    pub number:   usize,
    pub line:     u32,
    pub passed:   bool,
    pub got:      String,
    pub expected: String,
}

/// Compare a query result against its expected literal sequence.
pub fn check<T: PartialEq + Display>(number: usize, line: u32, got: &[T], expected: &[T]) -> CaseResult {
    CaseResult {
        number,
        line,
        passed:   got == expected,
        got:      fmt_seq(got),
        expected: fmt_seq(expected),
    }
}

/// Collects the cases of one scenario, numbering them from 1.
#[derive(Debug, Default)]
pub struct Cases {
    results: Vec<CaseResult>,
}

impl Cases {
    pub fn new() -> Self { Self::default() }

    pub fn check<T: PartialEq + Display>(&mut self, line: u32, got: &[T], expected: &[T]) -> &mut Self {
        let number = self.results.len() + 1;
        self.results.push(check(number, line, got, expected));
        self
    }

    pub fn finish(self) -> Vec<CaseResult> { self.results }
}

/// A named group of cases, run as a unit.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub run:  fn() -> Vec<CaseResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub name:   String,
    pub cases:  Vec<CaseResult>,
    pub passed: usize,
    pub failed: usize,
}

impl ScenarioReport {
    pub fn ok(&self) -> bool { self.failed == 0 }
}

/// Whole-run outcome. `passed`/`failed` count scenarios, not cases.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub timestamp: String,
    pub scenarios: Vec<ScenarioReport>,
    pub passed:    usize,
    pub failed:    usize,
}

impl Summary {
    pub fn ok(&self) -> bool { self.failed == 0 }
}

pub fn run_scenario(scenario: &Scenario) -> ScenarioReport {
    log::debug!("running scenario {}", scenario.name);
    let cases = (scenario.run)();
    let passed = cases.iter().filter(|c| c.passed).count();
    ScenarioReport {
        name:   scenario.name.to_string(),
        failed: cases.len() - passed,
        passed,
        cases,
    }
}

pub fn run_all(scenarios: &[Scenario]) -> Summary {
    let reports: Vec<ScenarioReport> = scenarios.iter().map(run_scenario).collect();
    let passed = reports.iter().filter(|r| r.ok()).count();
    Summary {
        timestamp: chrono::Local::now().to_rfc3339(),
        failed:    reports.len() - passed,
        passed,
        scenarios: reports,
    }
}

fn verdict(ok: bool) -> &'static str {
    if ok { "PASSED" } else { "FAILED" }
}

/// Render a run as plain text. Failed cases are always listed;
/// passing ones only when `verbose`.
pub fn render_text(summary: &Summary, verbose: bool) -> String {
    let mut out = String::new();

    for sc in &summary.scenarios {
        out.push_str(&format!("{}\n", RULE));
        out.push_str(&format!("\tRunning scenario:\t{}\n", sc.name));
        out.push_str(&format!("{}\n", RULE));

        for case in sc.cases.iter().filter(|c| verbose || !c.passed) {
            out.push_str(&format!("#       : {}\n", case.number));
            out.push_str(&format!("Line    : {}\n", case.line));
            out.push_str(&format!("Result  : {}\n", verdict(case.passed)));
            out.push_str(&format!("Got     : {}\n", case.got));
            out.push_str(&format!("Expected: {}\n", case.expected));
            out.push('\n');
        }

        out.push_str(&format!("Result  : {}\n", verdict(sc.ok())));
        out.push_str(&format!("Passed  : {}\n", sc.passed));
        out.push_str(&format!("Failed  : {}\n", sc.failed));
        out.push_str("\n\n");
    }

    // ── Summary ────────────────────────────────────────────────────────
    out.push_str(&format!("{}\n", RULE));
    out.push_str("\t\t Scenario summary\n");
    out.push_str(&format!("{}\n", RULE));
    out.push_str(&format!("Result  : {}\n", verdict(summary.ok())));
    out.push_str(&format!("Passed  : {}\n", summary.passed));
    out.push_str(&format!("Failed  : {}\n", summary.failed));
    out.push_str(&format!("{}\n", RULE));
    out
}
