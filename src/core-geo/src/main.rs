use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use core_geo::common::config::AppConfig;
use core_geo::content::{SitemapRequest, StaticContent};
use core_geo::jsonld::schema::{
    ArticleInput, BreadcrumbInput, FaqPageInput, OrganizationInput, PersonInput, PlaceInput, ProductInput,
    ReviewInput, WebPageInput, WebSiteInput, build_article, build_breadcrumb_list, build_faq_page,
    build_organization, build_person, build_place, build_product, build_review, build_web_page, build_website,
};
use core_geo::jsonld::{StructuredData, to_json_ld_string, to_json_ld_string_pretty};
use core_geo::setup_logging;
use core_geo::sitemap::{LlmSitemapOptions, SitemapPolicy, SitemapSource, build_llm_sitemap};
use data_model_geo::profile::SiteProfile;
use serde::de::DeserializeOwned;

#[derive(Parser)]
#[command(name = "core-geo")]
#[command(about = "One-off tools for the GEO endpoints: LLM sitemaps, URL filters and JSON-LD", long_about = None)]
struct CoreCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an LLM sitemap from a source sitemap URL and print it
    Sitemap {
        /// Sitemap (or sitemap index) to read
        #[arg(short, long, value_parser = validate_url)]
        source: String,
        #[arg(short, long, value_enum, default_value_t = SitemapPolicy::AllPages)]
        policy: SitemapPolicy,
    },

    /// Print whether each URL would be kept in the LLM sitemap
    Filter {
        #[arg(short, long, value_enum, default_value_t = SitemapPolicy::AllPages)]
        policy: SitemapPolicy,
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Build a schema.org node from a JSON input file and print it as JSON-LD
    Jsonld {
        #[arg(short, long, value_enum)]
        kind: SchemaKind,
        /// JSON file holding the builder input
        #[arg(short, long, value_parser = validate_input_file)]
        input: PathBuf,
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SchemaKind {
    Website,
    Organization,
    WebPage,
    Person,
    Product,
    Place,
    Review,
    Article,
    FaqPage,
    Breadcrumb,
}

fn validate_url(s: &str) -> Result<String, String> {
    url::Url::parse(s)
        .map(|_| s.to_string())
        .map_err(|e| format!("Invalid URL: {}", e))
}

fn validate_input_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if !path.exists() {
        return Err(format!("Input path does not exist: {}", path.display()));
    }

    if !path.is_file() {
        return Err(format!("Input path is not a file: {}", path.display()));
    }

    Ok(path)
}

fn read_input<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid {} input", path.display()))
}

/// None when the builder has nothing to emit for the input.
fn build_node(kind: SchemaKind, input: &Path) -> anyhow::Result<Option<StructuredData>> {
    let node = match kind {
        SchemaKind::Website => Some(StructuredData::WebSite(build_website(&read_input::<WebSiteInput>(input)?))),
        SchemaKind::Organization => {
            let organization: OrganizationInput = read_input(input)?;
            Some(StructuredData::Organization(build_organization(&organization)))
        }
        SchemaKind::WebPage => Some(StructuredData::WebPage(build_web_page(&read_input::<WebPageInput>(input)?))),
        SchemaKind::Person => Some(StructuredData::Person(build_person(&read_input::<PersonInput>(input)?))),
        SchemaKind::Product => Some(StructuredData::Product(build_product(&read_input::<ProductInput>(input)?))),
        SchemaKind::Place => build_place(&read_input::<PlaceInput>(input)?).map(StructuredData::Place),
        SchemaKind::Review => Some(StructuredData::Review(build_review(&read_input::<ReviewInput>(input)?))),
        SchemaKind::Article => Some(StructuredData::Article(build_article(&read_input::<ArticleInput>(input)?))),
        SchemaKind::FaqPage => build_faq_page(&read_input::<FaqPageInput>(input)?).map(StructuredData::FaqPage),
        SchemaKind::Breadcrumb => {
            build_breadcrumb_list(&read_input::<Vec<BreadcrumbInput>>(input)?).map(StructuredData::BreadcrumbList)
        }
    };
    Ok(node)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging("core_geo=info");
    let cli = CoreCli::parse();

    match cli.command {
        Commands::Sitemap { source, policy } => {
            let config = AppConfig::from_env()?;
            let http = config.http_client()?;
            let options = LlmSitemapOptions::builder(policy)
                .source(SitemapSource::Url(source.clone()))
                .fetch_concurrency(config.fetch_concurrency)
                .build();

            let parsed = url::Url::parse(&source)?;
            let request = SitemapRequest::new(parsed.origin().ascii_serialization(), "default", "en");
            let content = StaticContent::new(Arc::new(SiteProfile::default()));

            println!("{}", build_llm_sitemap(&request, &options, &http, &content).await);
        }

        Commands::Filter { policy, urls } => {
            let filter = LlmSitemapOptions::for_policy(policy).filter;
            for url in urls {
                let verdict = if filter.should_include(&url) { "include" } else { "exclude" };
                println!("{verdict}\t{url}");
            }
        }

        Commands::Jsonld { kind, input, pretty } => match build_node(kind, &input)? {
            Some(node) => {
                let json = if pretty { to_json_ld_string_pretty(&node)? } else { to_json_ld_string(&node)? };
                println!("{json}");
            }
            None => {
                eprintln!("Nothing to emit for {kind:?}: the input has no usable content");
                std::process::exit(1)
            }
        },
    }

    Ok(())
}
