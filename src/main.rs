use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use scholarx::{
    filter_matches, tokenize, EntityId, EntityKind, Error, SearchResponse, SkillId, TeammateQuery, WorkingSet,
    DEFAULT_LIMIT,
};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Keyword search and teammate ranking over a ScholarX working set
#[derive(Parser, Debug)]
#[command(name = "scholarx")]
#[command(about = "Search projects, study groups and profiles", long_about = None)]
struct Args {
    /// Path to the working set JSON file
    #[arg(short, long, default_value = "./working_set.json")]
    data: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filter one kind of entity by a free-text query
    Search {
        #[arg(short, long, value_enum)]
        kind: Kind,

        /// Search box text; empty matches everything
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Rank profiles as teammates for a project or study group
    #[command(group(ArgGroup::new("target").required(true).args(["project", "group"])))]
    Teammates {
        #[arg(long)]
        project: Option<String>,

        #[arg(long)]
        group: Option<String>,

        /// Optional keyword filter over candidate profiles
        #[arg(short, long, default_value = "")]
        query: String,

        /// Score against these required skill ids only (repeatable)
        #[arg(long = "skill")]
        skills: Vec<String>,

        /// Maximum number of candidates to print
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Projects,
    Groups,
    Profiles,
}

impl From<Kind> for EntityKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Projects => EntityKind::Project,
            Kind::Groups => EntityKind::StudyGroup,
            Kind::Profiles => EntityKind::Profile,
        }
    }
}

/// Command-line ids are integers when they parse as one
fn parse_id<T: From<u64> + From<String>>(raw: &str) -> T {
    raw.parse::<u64>()
        .map(<T as From<u64>>::from)
        .unwrap_or_else(|_| <T as From<String>>::from(raw.to_string()))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting ScholarX v{}", env!("CARGO_PKG_VERSION"));
    info!("Working set: {:?}", args.data);

    let set = WorkingSet::load(&args.data)?;
    info!(
        "Loaded {} projects, {} study groups, {} profiles",
        set.projects.len(),
        set.groups.len(),
        set.profiles.len()
    );

    let output = match args.command {
        Command::Search { kind, query } => {
            let entities = set.entities(kind.into());
            let keywords = tokenize(&query);
            let results = filter_matches(entities, &keywords);
            serde_json::to_string_pretty(&SearchResponse::from_matches(&results, keywords.len(), entities.len()))?
        }
        Command::Teammates { project, group, query, skills, limit } => {
            let (query_builder, members) = match (project, group) {
                (Some(id), _) => {
                    let id: EntityId = parse_id(&id);
                    let project = set
                        .project(&id)
                        .ok_or_else(|| Error::NotFound(format!("project {}", id)))?;
                    (TeammateQuery::for_project(project), project.members.clone())
                }
                (None, Some(id)) => {
                    let id: EntityId = parse_id(&id);
                    let group = set
                        .group(&id)
                        .ok_or_else(|| Error::NotFound(format!("study group {}", id)))?;
                    (TeammateQuery::for_group(group), group.members.clone())
                }
                (None, None) => anyhow::bail!("either --project or --group is required"),
            };

            let ranked = query_builder
                .with_keywords(tokenize(&query))
                .with_members(members.iter().filter_map(|id| set.profile(id)))
                .with_selected_skills(skills.iter().map(|raw| parse_id::<SkillId>(raw)))
                .limit(limit)
                .rank(set.entities(EntityKind::Profile));
            serde_json::to_string_pretty(&ranked)?
        }
    };

    println!("{}", output);
    Ok(())
}
