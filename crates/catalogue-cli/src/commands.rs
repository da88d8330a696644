use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, warn};

use catalogue_cli::render::{
    cohorts_table, keyword_subtree_table, keyword_tree_table, mappings_table, orphan_notes,
    variable_detail_table, variables_footer, variables_table,
};
use catalogue_client::{
    CatalogueContext, CatalogueFetcher, CatalogueSettings, HttpTransport, Selection,
};
use catalogue_model::KeywordTree;

use crate::cli::{
    CohortsArgs, ConnectionArgs, KeywordsArgs, SelectionArgs, VariableArgs, VariablesArgs,
};

pub type Fetcher = CatalogueFetcher<HttpTransport>;

/// Resolve settings: file, then environment, then command-line flags.
pub fn load_settings(args: &ConnectionArgs) -> Result<CatalogueSettings> {
    let settings = match &args.settings {
        Some(path) => CatalogueSettings::load(path)
            .with_context(|| format!("load settings from {}", path.display()))?,
        None => CatalogueSettings::default(),
    };
    let settings = settings.with_env_overrides();
    let settings = apply_flags(settings, args);
    settings.validate().context("invalid settings")?;
    debug!(
        endpoint = %settings.endpoint,
        release = %settings.release(),
        "Settings resolved"
    );
    Ok(settings)
}

fn apply_flags(mut settings: CatalogueSettings, args: &ConnectionArgs) -> CatalogueSettings {
    if let Some(endpoint) = &args.endpoint {
        settings.endpoint.clone_from(endpoint);
    }
    if let Some(acronym) = &args.release_acronym {
        settings.release_resource_acronym.clone_from(acronym);
    }
    if let Some(version) = &args.release_version {
        settings.release_version.clone_from(version);
    }
    settings
}

pub fn build_fetcher(settings: &CatalogueSettings) -> Result<Fetcher> {
    let transport = HttpTransport::new(settings).context("create HTTP client")?;
    Ok(CatalogueFetcher::from_settings(settings, transport))
}

fn context_for(args: &SelectionArgs) -> CatalogueContext {
    let keywords = args.keywords.iter().cloned();
    let mut selection = Selection::new().with_keywords(keywords);
    selection.set_search(args.search.clone());
    CatalogueContext::new(selection)
}

pub async fn run_variables(fetcher: &Fetcher, args: &VariablesArgs) -> Result<()> {
    let mut ctx = context_for(&args.selection);
    let page = if args.with_mappings {
        fetcher.refresh(&mut ctx).await?
    } else {
        fetcher.fetch_variables(&mut ctx).await?
    };
    println!("Release: {}", fetcher.release());
    println!("{}", variables_table(&page));
    println!("{}", variables_footer(&page));
    if args.with_mappings {
        println!("{}", mappings_table(ctx.cache.variable_mappings()));
    }
    Ok(())
}

pub async fn run_variable(fetcher: &Fetcher, args: &VariableArgs) -> Result<()> {
    let mut ctx = CatalogueContext::default();
    let detail = fetcher.fetch_variable_detail(&mut ctx, &args.name).await?;
    println!("{}", variable_detail_table(&detail));
    Ok(())
}

pub async fn run_keywords(fetcher: &Fetcher, args: &KeywordsArgs) -> Result<()> {
    let selected = args.selected.iter().cloned();
    let mut ctx = CatalogueContext::new(Selection::new().with_keywords(selected));
    fetcher.fetch_keywords(&mut ctx).await?;
    let tree: KeywordTree = ctx.cache.keyword_tree().context("build keyword tree")?;
    for note in orphan_notes(&tree) {
        warn!("{note}");
    }
    let table = match &args.under {
        Some(root) => keyword_subtree_table(&tree, root, &ctx.selection)
            .ok_or_else(|| anyhow!("unknown keyword '{root}'"))?,
        None => keyword_tree_table(&tree, &ctx.selection),
    };
    println!("{table}");
    info!(
        keywords = tree.len(),
        roots = tree.roots().len(),
        "Taxonomy printed"
    );
    Ok(())
}

pub async fn run_cohorts(fetcher: &Fetcher, args: &CohortsArgs) -> Result<()> {
    let mut ctx = CatalogueContext::default();
    fetcher.fetch_cohorts(&mut ctx).await?;
    let table = match &args.kind {
        Some(kind) => cohorts_table(ctx.cache.cohorts_of_type(kind)),
        None => cohorts_table(ctx.cache.cohorts()),
    };
    println!("{table}");
    Ok(())
}

pub async fn run_mappings(fetcher: &Fetcher, args: &SelectionArgs) -> Result<()> {
    let mut ctx = context_for(args);
    fetcher.refresh(&mut ctx).await?;
    println!("{}", mappings_table(ctx.cache.variable_mappings()));
    Ok(())
}
