use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use refnav_dom::Document;
use refnav_search::SearchIndex;
use refnav_shell::render::{
    render_breadcrumbs, render_desktop, render_mobile, render_not_found, render_rail, render_search,
};
use refnav_shell::{load_taxonomy, NavigationShell, Page, ShellConfig};
use refnav_taxonomy::Taxonomy;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn cli() -> Command {
    Command::new("refnav")
        .version(refnav_shell::VERSION)
        .about("Browse, search and check a reference-site navigation catalog")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Shell configuration file (TOML)"),
        )
        .arg(
            Arg::new("taxonomy")
                .long("taxonomy")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Taxonomy document (YAML or JSON) to use instead of the built-in catalog"),
        )
        .subcommand(
            Command::new("tree")
                .about("Print the navigation tree")
                .arg(
                    Arg::new("path")
                        .long("path")
                        .default_value("/")
                        .help("Current location, for active highlighting"),
                )
                .arg(
                    Arg::new("expand-all")
                        .long("expand-all")
                        .action(ArgAction::SetTrue)
                        .help("Expand every category and subcategory"),
                )
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .default_value("desktop")
                        .value_parser(["desktop", "rail", "mobile"])
                        .help("Presentation to render"),
                )
                .arg(
                    Arg::new("flyout")
                        .long("flyout")
                        .help("Category whose flyout is open (rail mode)"),
                ),
        )
        .subcommand(
            Command::new("search")
                .about("Search topic titles")
                .arg(Arg::new("query").required(true).help("Search text"))
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize))
                        .help("Maximum number of results"),
                ),
        )
        .subcommand(
            Command::new("crumbs")
                .about("Print breadcrumbs for a path")
                .arg(Arg::new("path").required(true).help("URL path")),
        )
        .subcommand(
            Command::new("locate")
                .about("Show what a path resolves to")
                .arg(Arg::new("path").required(true).help("URL path")),
        )
        .subcommand(
            Command::new("lint").about("Report topics whose route does not follow their ids"),
        )
        .subcommand(
            Command::new("topics")
                .about("List every topic in catalog order")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load(matches: &ArgMatches) -> anyhow::Result<(ShellConfig, Arc<Taxonomy>)> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ShellConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ShellConfig::default(),
    };
    if let Some(path) = matches.get_one::<PathBuf>("taxonomy") {
        config.taxonomy = Some(path.clone());
    }
    let taxonomy = load_taxonomy(&config).context("loading taxonomy")?;
    Ok((config, taxonomy))
}

fn string_arg<'a>(args: &'a ArgMatches, name: &str) -> anyhow::Result<&'a str> {
    args.get_one::<String>(name)
        .map(String::as_str)
        .with_context(|| format!("missing argument '{name}'"))
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let matches = cli().get_matches();
    let (config, taxonomy) = load(&matches)?;

    match matches.subcommand() {
        Some(("tree", args)) => {
            let path = string_arg(args, "path")?;
            let mode = string_arg(args, "mode")?;
            let collapsed = config.rail_collapsed || mode == "rail";
            let mut shell =
                NavigationShell::mount(Arc::clone(&taxonomy), config, Document::new())?;
            shell.navigate(path);
            if args.get_flag("expand-all") {
                shell.state_mut().desktop_mut().expand_all(&taxonomy);
            }
            if collapsed != shell.state().is_rail_collapsed() {
                shell.dispatch(refnav_nav::NavEvent::ToggleRail);
            }
            let text = match mode {
                "rail" => {
                    if let Some(flyout) = args.get_one::<String>("flyout") {
                        shell.dispatch(refnav_nav::NavEvent::OpenFlyout(flyout.clone()));
                    }
                    render_rail(&shell.rail_view())
                }
                "mobile" => {
                    shell.dispatch(refnav_nav::NavEvent::ToggleDrawer);
                    render_mobile(&shell.mobile_view())
                }
                _ => render_desktop(&shell.desktop_view()),
            };
            println!("{text}");
        }
        Some(("search", args)) => {
            let query = string_arg(args, "query")?;
            let limit = args
                .get_one::<usize>("limit")
                .copied()
                .unwrap_or(config.search_limit);
            anyhow::ensure!(limit > 0, "--limit must be at least 1");
            let index = SearchIndex::new(&taxonomy).with_limit(limit);
            let text = render_search(&index.search(query));
            if !text.is_empty() {
                println!("{text}");
            }
        }
        Some(("crumbs", args)) => {
            let path = string_arg(args, "path")?;
            let mut shell = NavigationShell::mount(taxonomy, config, Document::new())?;
            shell.navigate(path);
            let trail = shell.breadcrumbs();
            if trail.is_empty() {
                println!("(no breadcrumbs on landing pages)");
            } else {
                println!("{}", render_breadcrumbs(&trail));
            }
        }
        Some(("locate", args)) => {
            let path = string_arg(args, "path")?;
            let mut shell = NavigationShell::mount(taxonomy, config, Document::new())?;
            shell.navigate(path);
            match shell.page() {
                Page::Landing => println!("Landing page {path}"),
                Page::Lesson {
                    topic,
                    previous,
                    next,
                } => {
                    println!("{}  {}", topic.title, topic.route);
                    if let Some(difficulty) = topic.difficulty {
                        println!("Difficulty: {difficulty}");
                    }
                    println!("{}", render_breadcrumbs(&shell.breadcrumbs()));
                    if let Some(previous) = previous {
                        println!("Previous: {}  {}", previous.title, previous.route);
                    }
                    if let Some(next) = next {
                        println!("Next: {}  {}", next.title, next.route);
                    }
                }
                Page::NotFound(view) => {
                    println!("{}", render_not_found(&view));
                    std::process::exit(1);
                }
            }
        }
        Some(("lint", _)) => {
            let issues = taxonomy.route_shape_lint();
            if issues.is_empty() {
                println!("All {} routes follow their ids", taxonomy.topic_count());
                return Ok(());
            }
            for issue in &issues {
                println!("{issue}");
            }
            println!("{} route(s) will not resolve to full breadcrumbs", issues.len());
            std::process::exit(1);
        }
        Some(("topics", args)) => {
            if args.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(taxonomy.flatten())?);
            } else {
                for topic in taxonomy.flatten() {
                    println!("{:<12} {:<28} {}", topic.category, topic.title, topic.route);
                }
            }
        }
        _ => unreachable!("subcommand_required"),
    }

    Ok(())
}
