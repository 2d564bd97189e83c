use anyhow::{anyhow, Context, Result};
use catalog_model::{Film, FilmId, GenreId};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::{split_genre_names, FilmQuery, SortBy, SortDirection};
use server::FilmCatalogService;
use sources::{CatalogFetcher, HttpFilmProvider};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::debug;

/// Film Catalog - search, filter and sort films from the catalog service
#[derive(Parser)]
#[command(name = "film-catalog")]
#[command(about = "Query the film catalog from the command line", long_about = None)]
struct Cli {
    /// Base URL of the upstream film-data service
    #[arg(
        short,
        long,
        env = "SERVICEDB_API_URL",
        default_value = "http://localhost:8081/api"
    )]
    upstream_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search, filter and sort films
    Search {
        /// Title substring (case-insensitive)
        #[arg(long)]
        title: Option<String>,

        /// Genre ids, comma-separated
        #[arg(long, value_delimiter = ',')]
        genre_ids: Vec<GenreId>,

        /// Genre names, comma-separated (case-insensitive)
        #[arg(long)]
        genre_names: Option<String>,

        /// Exact release year
        #[arg(long)]
        release_year: Option<i32>,

        /// Minimum rating; unrated films never match
        #[arg(long)]
        min_rating: Option<f64>,

        /// Original language (case-insensitive)
        #[arg(long)]
        language: Option<String>,

        /// Sort key: releaseYear, rating or popularity
        #[arg(long, default_value = "releaseYear")]
        sort_by: String,

        /// Sort direction: asc or desc
        #[arg(long, default_value = "desc")]
        sort_direction: String,

        /// Maximum number of films to print
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Show a single film
    Show {
        /// Film id
        #[arg(long)]
        id: FilmId,
    },

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let provider = HttpFilmProvider::new(cli.upstream_url.clone());
    let service = FilmCatalogService::new(CatalogFetcher::from_provider(provider));
    debug!("Using upstream {}", cli.upstream_url);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search {
            title,
            genre_ids,
            genre_names,
            release_year,
            min_rating,
            language,
            sort_by,
            sort_direction,
            limit,
        } => {
            let mut query = FilmQuery::new()
                .with_genre_ids(genre_ids)
                .sorted_by(SortBy::parse(&sort_by), SortDirection::parse(&sort_direction));
            if let Some(title) = title {
                query = query.with_title(title);
            }
            if let Some(names) = genre_names {
                query = query.with_genre_names(split_genre_names(&names));
            }
            if let Some(year) = release_year {
                query = query.with_release_year(year);
            }
            if let Some(min_rating) = min_rating {
                query = query.with_min_rating(min_rating);
            }
            if let Some(language) = language {
                query = query.with_original_language(language);
            }
            handle_search(&service, &query, limit).await?
        }
        Commands::Show { id } => handle_show(&service, id).await?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(service, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'search' command
async fn handle_search(service: &FilmCatalogService, query: &FilmQuery, limit: usize) -> Result<()> {
    let start = Instant::now();
    let films = service
        .search_films(query)
        .await
        .context("Failed to search the film catalog")?;

    println!(
        "{}",
        format!(
            "{} films (sorted by {} {}) in {:?}:",
            films.len(),
            query.sort_by,
            query.sort_direction,
            start.elapsed()
        )
        .bold()
        .blue()
    );
    print_films(&films, limit);
    Ok(())
}

/// Handle the 'show' command
async fn handle_show(service: &FilmCatalogService, id: FilmId) -> Result<()> {
    let film = service
        .get_film_by_id(id)
        .await
        .ok_or_else(|| anyhow!("Film {} not found", id))?;

    println!("{}", format!("{} ({})", film.title, film.release_year).bold().blue());
    println!("{}ID: {}", "• ".green(), film.id);
    println!(
        "{}Language: {}",
        "• ".green(),
        film.original_language.as_deref().unwrap_or("unknown")
    );
    if let Some(duration) = film.duration {
        println!("{}Duration: {} min", "• ".green(), duration);
    }
    println!("{}Rating: {}", "• ".cyan(), format_rating(&film));
    println!("{}Genres: {}", "• ".cyan(), format_genres(&film));
    println!(
        "{}Popularity: {} ({} reviews)",
        "• ".cyan(),
        film.popularity(),
        film.reviews.len()
    );
    if let Some(data) = &film.film_data {
        println!("{}Budget: {:.0}", "• ".yellow(), data.budget);
        println!("{}Revenue: {:.0}", "• ".yellow(), data.revenue);
    }
    for credit in &film.personnel {
        let name = credit
            .person
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .unwrap_or("unknown");
        println!(
            "  - {} ({})",
            name,
            credit.role.as_deref().unwrap_or("crew")
        );
    }
    Ok(())
}

/// Handle the 'benchmark' command
///
/// Fires `requests` default searches, at most `concurrent` at a time, and
/// reports latency percentiles.
async fn handle_benchmark(
    service: FilmCatalogService,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if requests == 0 {
        return Err(anyhow!("--requests must be at least 1"));
    }

    let service = Arc::new(service);
    let permits = Arc::new(Semaphore::new(concurrent.max(1)));
    let query = Arc::new(FilmQuery::new().sorted_by(SortBy::Popularity, SortDirection::Descending));

    let wall_clock = Instant::now();
    let mut handles = Vec::with_capacity(requests);
    for _ in 0..requests {
        let service = service.clone();
        let permits = permits.clone();
        let query = query.clone();
        handles.push(tokio::spawn(async move {
            let _permit = permits.acquire_owned().await?;
            let start = Instant::now();
            service.search_films(&query).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        }));
    }

    // Wait for all tasks to complete and collect timings
    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    for handle in handles {
        timings.push(handle.await??);
    }
    let total_time = wall_clock.elapsed();

    timings.sort();
    let busy: Duration = timings.iter().sum();
    let avg_latency = busy / (timings.len() as u32);
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

fn format_rating(film: &Film) -> String {
    film.rating
        .map(|rating| format!("{:.1}", rating))
        .unwrap_or_else(|| "unrated".to_string())
}

fn format_genres(film: &Film) -> String {
    film.genres
        .iter()
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Helper function to format and print search results
fn print_films(films: &[Film], limit: usize) {
    for (i, film) in films.iter().take(limit).enumerate() {
        println!(
            "{}. {} ({}) [{}] - Rating: {} - Popularity: {}",
            (i + 1).to_string().green(),
            film.title,
            film.release_year,
            format_genres(film),
            format_rating(film),
            film.popularity()
        );
    }
    if films.len() > limit {
        println!("... and {} more", films.len() - limit);
    }
}
