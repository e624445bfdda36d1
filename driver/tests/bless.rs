use std::env;
use std::path::PathBuf;

use macros::gen_bless_tests;
use utos_driver::{
    bless::{BlessCase, BlessOutcome},
    BLESS_ENV,
};

#[gen_bless_tests("tests/bless")]
fn check_blessed(case: &str) {
    let update = env::var_os(BLESS_ENV).is_some();
    let case = BlessCase::new(PathBuf::from(case));

    match case.run(update) {
        Ok(BlessOutcome::Matched) => {}
        Ok(BlessOutcome::Updated) => eprintln!("Blessed {}", case.blessed().display()),
        Err(err) => panic!(
            "Bless case {} failed: {err}\n--- expected ({})\n--- actual\n{}",
            case.name,
            case.blessed().display(),
            case.generate().unwrap_or_else(|e| e.to_string()),
        ),
    }
}
