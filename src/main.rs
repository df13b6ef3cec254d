// src/main.rs

use std::collections::HashSet;
use std::process::ExitCode;
use std::str::FromStr;

use frontend::config::Config;
use frontend::error::AppError;
use frontend::fixtures;
use frontend::models::execution::RunCodeResponse;
use frontend::models::problem::SupportedLanguage;
use frontend::models::user::AuthFormData;
use frontend::routes;
use frontend::state::{AppState, FixtureState};
use frontend::workflow::{
    catalog::{NO_MATCHES, ProblemDetailView, ProblemQuery, ProblemTab, problem_cards},
    dashboard::{NO_SUBMISSIONS, ProfileView, SubmissionTab, submission_rows},
    editor::EditorState,
    execution::{ExecutionKind, ExecutionWorkflow},
    hints::HintTracker,
    loader::{DetailState, ProblemLoader},
    output::OutputView,
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "\
usage: frontend <command>

  problems [tab] [search...]               list problems (tabs: all, easy, medium, hard, expert, solved, unsolved)
  problem <id>                             show one problem
  run <id> <language> <file> [stdin-file]  run a solution
  submit <id> <language> <file> [stdin-file]
  submissions [all|accepted|failed]        list your submissions
  profile                                  show your profile
  login <email> <password>                 sign in and show the navigation
  serve-fixtures                           serve the sample problem set on FIXTURE_ADDR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Problems,
    Problem,
    Execute(ExecutionKind),
    Submissions,
    Profile,
    Login,
    ServeFixtures,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "problems" => Ok(Self::Problems),
            "problem" => Ok(Self::Problem),
            "run" => Ok(Self::Execute(ExecutionKind::Run)),
            "submit" => Ok(Self::Execute(ExecutionKind::Submit)),
            "submissions" => Ok(Self::Submissions),
            "profile" => Ok(Self::Profile),
            "login" => Ok(Self::Login),
            "serve-fixtures" => Ok(Self::ServeFixtures),
            other => Err(AppError::BadRequest(format!("unknown command '{}'", other))),
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Load configuration from environment (and .env, if present)
    let config = Config::from_env()?;

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "frontend.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    // Command output owns stdout; logs go to stderr.
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(name) = args.first() else {
        println!("{}", USAGE);
        return Ok(ExitCode::SUCCESS);
    };
    let Ok(command) = name.parse::<Command>() else {
        eprintln!("unknown command '{}'\n\n{}", name, USAGE);
        // `_guard` has to drop for the file writer to flush.
        return Ok(ExitCode::from(2));
    };

    let state = AppState::new(config);
    tracing::info!("Using backend at {}", state.config.api_base_url);

    match command {
        Command::Problems => list_problems(&state, &args[1..]).await?,
        Command::Problem => show_problem(&state, args.get(1)).await?,
        Command::Execute(kind) => execute(&state, kind, &args[1..]).await?,
        Command::Submissions => list_submissions(&state, args.get(1)).await?,
        Command::Profile => show_profile(&state).await?,
        Command::Login => login(&state, &args[1..]).await?,
        Command::ServeFixtures => serve_fixtures(&state).await?,
    }

    Ok(ExitCode::SUCCESS)
}

async fn list_problems(state: &AppState, args: &[String]) -> Result<(), AppError> {
    let (tab, search) = match args.first().map(|a| a.parse::<ProblemTab>()) {
        Some(Ok(tab)) => (tab, args[1..].join(" ")),
        _ => (ProblemTab::All, args.join(" ")),
    };

    let loader = ProblemLoader::new(state.api.clone());
    let problems = loader.load_list().await;
    let solved = solved_ids(state).await;

    let cards = problem_cards(&problems, &ProblemQuery::new(search, tab), &solved);
    if cards.is_empty() {
        println!("{}", NO_MATCHES);
    }
    for card in cards {
        println!("{}\n", card);
    }
    Ok(())
}

async fn show_problem(state: &AppState, id: Option<&String>) -> Result<(), AppError> {
    let id = id.ok_or_else(|| AppError::BadRequest("problem id required".to_string()))?;

    let loader = ProblemLoader::new(state.api.clone());
    let Some(DetailState::Loaded(problem)) = loader.load_detail(id).await else {
        println!("Problem not found");
        println!("The problem you're looking for doesn't exist or has been removed.");
        return Ok(());
    };

    let view = ProblemDetailView::new(&problem);
    println!(
        "{}  [{}]  {}s  {} likes\n",
        view.title, view.difficulty_label, view.time_limit_seconds, view.likes
    );
    for line in view.description_section() {
        println!("{}", line);
    }
    println!();
    for line in view.examples_section() {
        println!("{}", line);
    }
    println!();
    for line in view.constraints_section() {
        println!("{}", line);
    }
    println!();
    let mut hints = HintTracker::new(view.hints.len());
    for index in 0..hints.len() {
        hints.toggle(index);
    }
    for line in view.hints_section(&hints) {
        println!("{}", line);
    }
    Ok(())
}

async fn execute(state: &AppState, kind: ExecutionKind, args: &[String]) -> Result<(), AppError> {
    let [id, language, file, rest @ ..] = args else {
        return Err(AppError::BadRequest(
            "expected <id> <language> <file> [stdin-file]".to_string(),
        ));
    };
    let language: SupportedLanguage = language.parse()?;

    let source = read_file(file).await?;
    let stdin = match rest.first() {
        Some(path) => read_file(path).await?,
        None => String::new(),
    };

    let loader = ProblemLoader::new(state.api.clone());
    let problem = match loader.load_detail(id).await {
        Some(DetailState::Loaded(problem)) => problem,
        _ => return Err(AppError::NotFound(format!("problem {}", id))),
    };

    let mut editor = EditorState::new(&problem, language);
    editor.edit(source);
    println!("{} - {} ({} lines)", problem.title, editor.file_name(), editor.line_count());

    let workflow = ExecutionWorkflow::new(state.api.clone());
    let result = match kind {
        ExecutionKind::Run => workflow.run(editor.code(), editor.language(), &stdin).await,
        ExecutionKind::Submit => workflow.submit(editor.code(), editor.language(), &stdin).await,
    };

    println!("{}", OutputView::from_result(&result));
    Ok(())
}

async fn list_submissions(state: &AppState, tab: Option<&String>) -> Result<(), AppError> {
    let tab = match tab {
        Some(raw) => raw.parse()?,
        None => SubmissionTab::All,
    };

    let submissions = state.users.fetch_submissions().await?;
    let problems = ProblemLoader::new(state.api.clone()).load_list().await;

    let rows = submission_rows(&submissions, tab, &problems);
    if rows.is_empty() {
        println!("No submissions yet\n{}", NO_SUBMISSIONS);
    }
    for row in rows {
        println!("{}", row);
    }
    Ok(())
}

async fn show_profile(state: &AppState) -> Result<(), AppError> {
    let user = state.users.fetch_user_profile().await?;
    print!("{}", ProfileView::new(&user));
    Ok(())
}

async fn login(state: &AppState, args: &[String]) -> Result<(), AppError> {
    let form = AuthFormData {
        email: args.first().cloned().unwrap_or_default(),
        password: args.get(1).cloned().unwrap_or_default(),
    };

    let user = state.session.sign_in(&form, state.users.as_ref()).await?;
    println!("Welcome back, {}!", user.display_name);

    let links: Vec<&str> = state.session.nav_links().iter().map(|l| l.label).collect();
    println!("{}", links.join(" | "));
    Ok(())
}

async fn serve_fixtures(state: &AppState) -> Result<(), AppError> {
    let fixture_state = FixtureState::new(
        fixtures::sample_problems(),
        RunCodeResponse {
            message: Some("Code execution is not available on the fixture backend".to_string()),
            ..Default::default()
        },
    );
    let app = routes::create_fixture_router(fixture_state);

    let addr = state.config.fixture_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::InternalServerError(format!("cannot bind {}: {}", addr, e)))?;
    tracing::info!("Fixture backend listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))
}

async fn solved_ids(state: &AppState) -> HashSet<String> {
    match state.users.fetch_solved_problem_ids().await {
        Ok(ids) => ids,
        Err(e) => {
            tracing::error!("Error fetching solved problems: {}", e);
            HashSet::new()
        }
    }
}

async fn read_file(path: &str) -> Result<String, AppError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::BadRequest(format!("cannot read {}: {}", path, e)))
}
