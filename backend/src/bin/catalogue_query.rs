//! Query the catalogue snapshot the way storefront list screens do.
//!
//! Loads settings and the snapshot, applies search, filters, and sorting,
//! then prints the requested page as JSON on stdout.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pagination::PageRequest;
use serde::Serialize;
use storefront::domain::Locale;
use storefront::domain::listing::{
    DiscriminatorField, Filter, FlagField, Listable, ListingQuery, NumericField, SortKey,
    TextField, list_page,
};
use storefront::{CatalogueSnapshot, StorefrontSettings};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// Record kinds the command can list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ListingKind {
    Products,
    Posts,
    Categories,
    Collections,
    HeroSlides,
}

/// `catalogue-query` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "catalogue-query",
    about = "Filter, sort, and paginate records from a catalogue snapshot",
    version
)]
struct CliArgs {
    /// Record kind to list.
    #[arg(long, value_enum, default_value = "products")]
    kind: ListingKind,
    /// Case-insensitive text matched against names and descriptions.
    #[arg(long)]
    search: Option<String>,
    /// Also match the search text against slugs.
    #[arg(long)]
    search_slugs: bool,
    /// Category slug.
    #[arg(long, value_name = "slug")]
    category: Option<String>,
    /// Collection slug.
    #[arg(long, value_name = "slug")]
    collection: Option<String>,
    /// Post status, e.g. `published`.
    #[arg(long, value_parser = parse_status)]
    status: Option<String>,
    /// Only records with stock on hand.
    #[arg(long)]
    in_stock: bool,
    /// Only featured records.
    #[arg(long)]
    featured: bool,
    /// Only products whose compare-at price is above the price.
    #[arg(long)]
    on_sale: bool,
    /// Inclusive lower price bound in kuruş.
    #[arg(long, value_name = "kurus")]
    min_price: Option<i64>,
    /// Inclusive upper price bound in kuruş.
    #[arg(long, value_name = "kurus")]
    max_price: Option<i64>,
    /// Sort order label such as `price_asc` or `newest`.
    #[arg(long, default_value = "newest")]
    sort: SortKey,
    /// Collation locale; overrides `STOREFRONT_LOCALE`.
    #[arg(long)]
    locale: Option<Locale>,
    /// One-based page number.
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Page size; overrides `STOREFRONT_PAGE_SIZE`.
    #[arg(long)]
    per_page: Option<u32>,
    /// Snapshot path; overrides `STOREFRONT_CATALOGUE_PATH`.
    #[arg(long = "catalogue", value_name = "path")]
    catalogue_path: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    run(args)
}

fn run(args: CliArgs) -> io::Result<()> {
    let settings =
        StorefrontSettings::from_environment("catalogue-query").map_err(io::Error::other)?;
    init_tracing(settings.json_logs);

    let locale = match args.locale {
        Some(locale) => locale,
        None => settings.locale().map_err(io::Error::other)?,
    };
    let per_page = match args.per_page {
        Some(per_page) => per_page,
        None => settings.first_page().map_err(io::Error::other)?.per_page(),
    };
    let request = PageRequest::new(args.page, per_page)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;

    let path = args
        .catalogue_path
        .clone()
        .unwrap_or_else(|| settings.catalogue_path());
    let snapshot = CatalogueSnapshot::load(&path).map_err(io::Error::other)?;

    let query = build_query(&args, locale);
    debug!(?query, page = request.page(), per_page = request.per_page(), "running listing query");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.kind {
        ListingKind::Products => write_page(&mut out, snapshot.products(), &query, request),
        ListingKind::Posts => write_page(&mut out, snapshot.posts(), &query, request),
        ListingKind::Categories => write_page(&mut out, snapshot.categories(), &query, request),
        ListingKind::Collections => write_page(&mut out, snapshot.collections(), &query, request),
        ListingKind::HeroSlides => write_page(&mut out, snapshot.hero_slides(), &query, request),
    }
}

fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(error) = result {
        warn!(%error, "tracing init failed");
    }
}

fn build_query(args: &CliArgs, locale: Locale) -> ListingQuery {
    let mut query = ListingQuery::default()
        .sorted_by(args.sort)
        .with_locale(locale);
    if let Some(search) = &args.search {
        query = query.with_search(search.as_str());
    }
    if args.search_slugs {
        query = query.searching([TextField::Name, TextField::Description, TextField::Slug]);
    }

    let equals = [
        (DiscriminatorField::Category, &args.category),
        (DiscriminatorField::Collection, &args.collection),
        (DiscriminatorField::Status, &args.status),
    ];
    for (field, value) in equals {
        if let Some(value) = value {
            query = query.with_filter(Filter::equals(field, value.as_str()));
        }
    }

    let flags = [
        (FlagField::InStock, args.in_stock),
        (FlagField::Featured, args.featured),
        (FlagField::OnSale, args.on_sale),
    ];
    for (field, enabled) in flags {
        if enabled {
            query = query.with_filter(Filter::flag(field));
        }
    }

    if args.min_price.is_some() || args.max_price.is_some() {
        query = query.with_filter(Filter::range(
            NumericField::Price,
            args.min_price,
            args.max_price,
        ));
    }
    query
}

fn write_page<T: Listable + Serialize>(
    out: &mut impl Write,
    items: &[T],
    query: &ListingQuery,
    request: PageRequest,
) -> io::Result<()> {
    let page = list_page(items, query, request);
    serde_json::to_writer_pretty(&mut *out, &page).map_err(io::Error::other)?;
    writeln!(out)
}

fn parse_status(raw: &str) -> Result<String, String> {
    let status = raw.trim().to_ascii_lowercase();
    match status.as_str() {
        "draft" | "published" | "archived" => Ok(status),
        _ => Err(format!(
            "unknown status '{raw}' (expected draft, published or archived)"
        )),
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for CLI parsing helpers.

    use rstest::rstest;

    use super::*;

    fn try_parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("catalogue-query").chain(args.iter().copied()))
    }

    fn parse(args: &[&str]) -> CliArgs {
        try_parse(args).expect("arguments should parse")
    }

    #[rstest]
    #[case("Published", Ok("published".to_owned()))]
    #[case(" archived ", Ok("archived".to_owned()))]
    fn status_parser_normalises_case(#[case] raw: &str, #[case] expected: Result<String, String>) {
        assert_eq!(parse_status(raw), expected);
    }

    #[rstest]
    fn status_parser_rejects_unknown_values() {
        let error = parse_status("live").expect_err("unknown status");
        assert!(error.contains("expected draft"));
    }

    #[rstest]
    fn defaults_list_newest_products() {
        let args = parse(&[]);
        assert_eq!(args.kind, ListingKind::Products);
        assert_eq!(args.sort, SortKey::Newest);
        assert_eq!(args.page, 1);
        assert!(args.per_page.is_none());
    }

    #[rstest]
    fn flags_become_filters() {
        let args = parse(&[
            "--kind",
            "products",
            "--category",
            "elbiseler",
            "--in-stock",
            "--min-price",
            "50000",
            "--sort",
            "price_asc",
        ]);
        let query = build_query(&args, Locale::Turkish);
        assert_eq!(
            query.filters,
            vec![
                Filter::equals(DiscriminatorField::Category, "elbiseler"),
                Filter::flag(FlagField::InStock),
                Filter::range(NumericField::Price, Some(50_000), None),
            ]
        );
        assert_eq!(query.sort, SortKey::PriceAscending);
    }

    #[rstest]
    #[case(&["--unknown-flag"])]
    #[case(&["--kind", "orders"])]
    #[case(&["--page", "first"])]
    fn invalid_arguments_surface_as_io_errors(#[case] args: &[&str]) {
        let error = try_parse(args)
            .map_err(io::Error::other)
            .expect_err("arguments should be rejected");

        assert_eq!(error.kind(), io::ErrorKind::Other);
        assert!(error.get_ref().is_some_and(|inner| inner.is::<clap::Error>()));
    }

    #[rstest]
    fn hero_slides_kind_uses_kebab_case() {
        assert_eq!(parse(&["--kind", "hero-slides"]).kind, ListingKind::HeroSlides);
    }
}
