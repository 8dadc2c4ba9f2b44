//! Interactive terminal run of the assessment: personal information (with
//! live Hindi transliteration of the name), the ten questions, then the
//! results. The finished certificate is saved to the certificate store.

use aptitude_insight::config::Config;
use aptitude_insight::errors::AppError;
use aptitude_insight::live_input::LiveTransliteration;
use aptitude_insight::models::{Gender, UserInfoForm};
use aptitude_insight::regions::{self, DEFAULT_STATE};
use aptitude_insight::step_controller::{StepController, StepOutcome};
use aptitude_insight::storage::{persist_certificate, JsonFileStore};
use aptitude_insight::transliteration::TransliterationClient;
use aptitude_insight::validation::validate_user_info;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

type Input = Lines<BufReader<Stdin>>;

async fn prompt(input: &mut Input, label: &str) -> anyhow::Result<String> {
    print!("{}: ", label);
    std::io::stdout().flush()?;
    input
        .next_line()
        .await?
        .map(|line| line.trim().to_string())
        .ok_or_else(|| anyhow::anyhow!("input closed"))
}

/// Picks from a numbered list; an empty answer takes `default` when given.
async fn choose<'a>(
    input: &mut Input,
    label: &str,
    items: &[&'a str],
    default: Option<&'a str>,
) -> anyhow::Result<Option<&'a str>> {
    for (i, item) in items.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, item);
    }
    let answer = prompt(input, label).await?;
    if answer.is_empty() {
        return Ok(default);
    }
    Ok(answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| items.get(i).copied()))
}

async fn read_form(input: &mut Input, live: &LiveTransliteration) -> anyhow::Result<UserInfoForm> {
    let name = prompt(input, "Full name").await?;

    live.on_input(&name);
    let mut field = live.subscribe();
    let suggested = tokio::time::timeout(
        Duration::from_secs(15),
        field.wait_for(|state| !state.translating),
    )
    .await
    .ok()
    .and_then(|r| r.ok().map(|state| state.value.clone()))
    .unwrap_or_default();

    let typed = prompt(input, &format!("Name in Hindi [{}]", suggested)).await?;
    let name_hi = if typed.is_empty() { suggested } else { typed };

    let age = prompt(input, "Age").await?.parse::<i64>().ok();

    let genders: Vec<&str> = Gender::ALL.iter().map(|g| g.as_str()).collect();
    let gender = choose(input, "Gender", &genders, None).await?;

    let states: Vec<&str> = regions::states().collect();
    let state = choose(
        input,
        &format!("State/UT [{}]", DEFAULT_STATE),
        &states,
        Some(DEFAULT_STATE),
    )
    .await?;

    let district = choose(input, "District", regions::districts(state), None).await?;

    Ok(UserInfoForm {
        name,
        name_hi,
        age,
        gender: gender.map(str::to_string),
        state: state.map(str::to_string),
        district: district.map(str::to_string),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aptitude_insight=warn".into()),
        )
        .init();

    let config = Config::from_env()?;
    let client = TransliterationClient::new(
        &config.transliteration_base_url,
        config.transliteration_timeout(),
    )?;
    let live = LiveTransliteration::new(Arc::new(client), config.debounce());
    let store = JsonFileStore::new(config.certificate_store_path.clone());

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut controller = StepController::default();

    println!("== Personal information ==");
    let user = loop {
        let form = read_form(&mut input, &live).await?;
        match validate_user_info(&form) {
            Ok(user) => break user,
            Err(AppError::Validation(fields)) => {
                for field in fields {
                    println!("  ! {}: {}", field.field, field.message);
                }
                println!("Please try again.\n");
            }
            Err(e) => return Err(e.into()),
        }
    };
    controller.submit_info(user)?;

    println!("\n== Assessment ==");
    let certificate = loop {
        let Some(engine) = controller.engine() else {
            anyhow::bail!("assessment ended unexpectedly");
        };
        let Some(question) = engine.current_question() else {
            anyhow::bail!("no current question");
        };
        println!(
            "\nQuestion {} of {} ({:.0}% done)\n{}",
            engine.index() + 1,
            engine.question_count(),
            engine.progress_percent(),
            question.question_text
        );
        let label = engine.advance_label();
        let texts: Vec<&str> = question.options.iter().map(|o| o.text).collect();

        let Some(chosen) = choose(&mut input, "Your answer", &texts, None).await? else {
            println!("  ! Please choose one of the listed options.");
            continue;
        };
        let Some(option) = question.options.iter().find(|o| o.text == chosen) else {
            continue;
        };

        let feedback = controller.select_option(option.score)?;
        println!("  > {}", feedback);
        prompt(&mut input, &format!("[Enter] {}", label)).await?;

        match controller.advance(config.issue_date()) {
            Ok(StepOutcome::NextQuestion(_)) => {}
            Ok(StepOutcome::Completed(certificate)) => break certificate,
            Err(e) => println!("  ! {}", e),
        }
    };

    println!("\n== Results ==");
    if let Some((total, feedback)) = controller.results_summary() {
        println!("Total score: {}", total);
        println!("{}", feedback);
    }
    println!("\n{}", certificate.final_assessment_text);

    persist_certificate(&store, &certificate).await;
    println!(
        "\nCertificate saved. Print it with: render_certificate --mode all > certificate.html"
    );

    Ok(())
}
