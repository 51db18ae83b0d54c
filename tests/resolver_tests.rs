//! End-to-end resolution tests: intent extraction, priority ordering,
//! context threading across tools, and fallback behavior, run against
//! file-backed data sources in a temp directory.

use sibyl::{Answer, Config, Resolver, FALLBACK_ANSWER};
use std::fs;
use tempfile::TempDir;

fn fixture() -> (TempDir, Resolver) {
    let dir = TempDir::new().unwrap();
    let kb_path = dir.path().join("kb.json");
    let jobs_path = dir.path().join("jobs.json");

    fs::write(
        &kb_path,
        r#"{"entries": [
            {"name": "Ada Lovelace", "summary": "Regarded as the first computer programmer."},
            {"name": "Optimizely", "summary": "Experimentation platform company."}
        ]}"#,
    )
    .unwrap();
    fs::write(
        &jobs_path,
        r#"{"jobs": [
            {"role": "software engineer", "company": "google", "location": "usa", "date_posted": "24h"},
            {"role": "software engineer", "company": "optimizely", "location": "dhaka", "date_posted": "1w"},
            {"role": "developer", "company": "google", "location": "remote", "date_posted": "1m"}
        ]}"#,
    )
    .unwrap();

    let resolver = Resolver::new(&Config {
        kb_path,
        jobs_path,
        default_city: "paris".to_string(),
    });
    (dir, resolver)
}

#[tokio::test]
async fn weather_query_answers_temperature() {
    let (_dir, resolver) = fixture();
    let answer = resolver.resolve("what is the temperature in Paris?").await;
    assert_eq!(answer, Answer::Number(18.0));
}

#[tokio::test]
async fn weather_query_answers_condition() {
    let (_dir, resolver) = fixture();
    let answer = resolver.resolve("how is the weather in dhaka").await;
    assert_eq!(answer, Answer::Text("hot & humid".to_string()));
}

#[tokio::test]
async fn weather_runs_before_calculator_regardless_of_phrase_order() {
    let (_dir, resolver) = fixture();
    // calculator trigger ("add") appears first in the text, but the weather
    // lookups must populate the context before the expression is evaluated
    let answer = resolver
        .resolve("add 10 to the average temperature in paris and london")
        .await;
    assert_eq!(answer, Answer::Number(27.5));

    // same intents, weather phrase first
    let answer = resolver
        .resolve("temperature in paris and london, average them and add 10")
        .await;
    assert_eq!(answer, Answer::Number(27.5));
}

#[tokio::test]
async fn plain_arithmetic_resolves() {
    let (_dir, resolver) = fixture();
    assert_eq!(
        resolver.resolve("2 plus 3 times 4").await,
        Answer::Number(14.0)
    );
    assert_eq!(
        resolver.resolve("10 divided by 0").await,
        Answer::Number(f64::INFINITY)
    );
}

#[tokio::test]
async fn kb_name_match_takes_precedence_over_summary_word() {
    let (_dir, resolver) = fixture();
    // "optimizely" matches an entry name; "programmer" appears in another
    // entry's summary
    let answer = resolver
        .resolve("is optimizely hiring a programmer")
        .await;
    // knowledge base (priority 1) runs before job search (priority 2), so
    // the final answer comes from the jobs tool; assert the KB choice via a
    // name-only query instead
    let kb_answer = resolver.resolve("tell me about optimizely").await;
    assert_eq!(
        kb_answer,
        Answer::Text("Experimentation platform company.".to_string())
    );
    match answer {
        Answer::Jobs(_) => {}
        other => panic!("expected jobs to answer last, got {:?}", other),
    }
}

#[tokio::test]
async fn kb_summary_word_fallback_reaches_the_executor() {
    let (_dir, resolver) = fixture();
    // no entry name in the query; "programmer" matches a summary token and
    // becomes the lookup argument, which no entry name contains
    let answer = resolver.resolve("any famous programmer").await;
    assert_eq!(answer, Answer::Text("No entry found.".to_string()));
}

#[tokio::test]
async fn job_search_filters_by_role_company_and_date() {
    let (_dir, resolver) = fixture();
    let answer = resolver
        .resolve("software engineer jobs at google posted recently")
        .await;
    match answer {
        Answer::Jobs(jobs) => {
            assert_eq!(jobs.len(), 1);
            assert_eq!(jobs[0].company, "google");
            assert_eq!(jobs[0].date_posted, "24h");
        }
        other => panic!("expected jobs answer, got {:?}", other),
    }
}

#[tokio::test]
async fn job_role_alone_triggers_search() {
    let (_dir, resolver) = fixture();
    let answer = resolver.resolve("openings for a developer").await;
    match answer {
        Answer::Jobs(jobs) => {
            assert_eq!(jobs.len(), 1);
            assert_eq!(jobs[0].location, "remote");
        }
        other => panic!("expected jobs answer, got {:?}", other),
    }
}

#[tokio::test]
async fn fallback_for_empty_and_unrecognized_queries() {
    let (_dir, resolver) = fixture();
    for query in ["", "   ", "tell me something nice"] {
        assert_eq!(
            resolver.resolve(query).await,
            Answer::Text(FALLBACK_ANSWER.to_string()),
            "query {:?} should fall back",
            query
        );
    }
}

#[tokio::test]
async fn missing_data_files_degrade_instead_of_failing() {
    let resolver = Resolver::new(&Config {
        kb_path: "/nonexistent/kb.json".into(),
        jobs_path: "/nonexistent/jobs.json".into(),
        default_city: "paris".to_string(),
    });

    // arithmetic and weather never touch the files
    assert_eq!(resolver.resolve("average of 4 and 6").await, Answer::Number(5.0));
    // job search over a missing file returns an empty list
    assert_eq!(
        resolver.resolve("any vacancy at google").await,
        Answer::Jobs(Vec::new())
    );
}
