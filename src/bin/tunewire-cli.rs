use clap::{Parser, Subcommand};
use futures_util::future::try_join_all;
use tracing_subscriber::EnvFilter;
use tunewire::models::{PlaylistDetail, Royalty};
use tunewire::resources::search;
use tunewire::ClientBuilder;

#[derive(Parser)]
#[command(name = "tunewire-cli")]
#[command(about = "Command-line client for the tunewire streaming backend", long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "TUNEWIRE_API_URL", default_value = "http://localhost:8000")]
    api_url: String,

    /// Login email (logs in before running the command)
    #[arg(long, env = "TUNEWIRE_EMAIL")]
    email: Option<String>,

    /// Login password
    #[arg(long, env = "TUNEWIRE_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Existing session cookie, e.g. "sessionid=..."
    #[arg(long, env = "TUNEWIRE_SESSION", hide_env_values = true)]
    session: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the logged-in user
    Whoami,
    /// List your albums
    Albums,
    /// List the songs of an album
    AlbumSongs { album_id: String },
    /// Show one song
    Song { song_id: String },
    /// List your playlists
    Playlists {
        /// Also fetch every playlist's songs
        #[arg(long)]
        details: bool,
    },
    /// Show one playlist with its songs
    Playlist { playlist_id: String },
    /// List podcasts
    Podcasts,
    /// Show one podcast with its episodes
    Podcast { podcast_id: String },
    /// List charts
    Charts,
    /// Show one chart
    Chart { chart_type: String },
    /// Show royalties
    Royalties,
    /// List premium packages
    Packages,
    /// Show payment history
    Transactions,
    /// Search songs, podcasts and playlists
    Search {
        /// Search query
        query: String,

        /// Narrow the results by title, creator or kind
        #[arg(short, long)]
        filter: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> tunewire::Result<()> {
    let api = ClientBuilder::from_env().base_url(&cli.api_url).build()?;

    if let Some(cookie) = &cli.session {
        api.add_cookie(cookie)?;
    }

    if let (Some(email), Some(password)) = (&cli.email, &cli.password) {
        let user = api.auth().login(email, password).await?;
        eprintln!("Logged in as {}", user.email);
    }

    match &cli.command {
        Commands::Whoami => {
            let user = api.auth().current_user().await?;
            println!("{} <{}>", user.name, user.email);
            println!("   Account: {}", user.account_kind());
            let roles = user.roles();
            if !roles.is_empty() {
                println!("   Roles: {}", roles.join(", "));
            }
        }
        Commands::Albums => {
            for (i, album) in api.albums().list_albums().await?.iter().enumerate() {
                println!(
                    "{}. {} [{}] - {} songs, {} (ID: {})",
                    i + 1,
                    album.title,
                    album.label,
                    album.song_count,
                    album.duration_formatted(),
                    album.id
                );
            }
        }
        Commands::AlbumSongs { album_id } => {
            for (i, song) in api.albums().list_songs(album_id).await?.iter().enumerate() {
                println!(
                    "{}. {} ({}) - {} plays, {} downloads",
                    i + 1,
                    song.title,
                    song.duration_formatted(),
                    song.total_plays,
                    song.total_downloads
                );
            }
        }
        Commands::Song { song_id } => {
            let song = api.songs().detail(song_id).await?;
            println!("{} - {}", song.artist, song.title);
            println!("   Album: {}", song.album);
            println!("   Genres: {}", song.genres.join(", "));
            println!("   Songwriters: {}", song.songwriters.join(", "));
            println!("   Duration: {}", song.duration_formatted());
            println!("   Released: {}", song.release());
            println!("   Plays: {}  Downloads: {}", song.total_plays, song.total_downloads);
        }
        Commands::Playlists { details } => {
            let playlist_api = api.playlists();
            let playlists = playlist_api.list().await?;
            if *details {
                let fetches = playlists.iter().map(|p| playlist_api.detail(&p.id));
                for detail in try_join_all(fetches).await? {
                    print_playlist(&detail);
                }
            } else {
                for (i, playlist) in playlists.iter().enumerate() {
                    println!(
                        "{}. {} - {} songs, {} (ID: {})",
                        i + 1,
                        playlist.title,
                        playlist.song_count,
                        playlist.duration_formatted(),
                        playlist.id
                    );
                }
            }
        }
        Commands::Playlist { playlist_id } => {
            print_playlist(&api.playlists().detail(playlist_id).await?);
        }
        Commands::Podcasts => {
            for (i, podcast) in api.podcasts().list().await?.iter().enumerate() {
                println!(
                    "{}. {} by {} - {} episodes (ID: {})",
                    i + 1,
                    podcast.title,
                    podcast.podcaster,
                    podcast.episode_count,
                    podcast.id
                );
            }
        }
        Commands::Podcast { podcast_id } => {
            let detail = api.podcasts().detail(podcast_id).await?;
            println!("{} ({})", detail.podcast.title, detail.podcast.genres.join(", "));
            for (i, episode) in detail.episodes.iter().enumerate() {
                println!(
                    "{}. {} ({}) - {}",
                    i + 1,
                    episode.title,
                    episode.duration_formatted(),
                    episode.release()
                );
            }
        }
        Commands::Charts => {
            for chart in api.charts().list().await? {
                println!("- {}", chart.display_title());
            }
        }
        Commands::Chart { chart_type } => {
            let chart = api.charts().detail(chart_type).await?;
            println!("{}", chart.chart_type);
            for (i, entry) in chart.entries.iter().enumerate() {
                println!(
                    "{}. {} - {} ({} plays)",
                    i + 1,
                    entry.artist,
                    entry.title,
                    entry.total_plays
                );
            }
        }
        Commands::Royalties => {
            let royalties = api.royalties().list().await?;
            for royalty in &royalties {
                println!(
                    "{} / {}: {:.2} ({} plays, {} downloads)",
                    royalty.album_title,
                    royalty.song_title,
                    royalty.amount,
                    royalty.total_plays,
                    royalty.total_downloads
                );
            }
            println!("Total: {:.2}", Royalty::sum(&royalties));
        }
        Commands::Packages => {
            for package in api.subscriptions().packages().await? {
                println!("- {}: {:.2}", package.display_name(), package.price);
            }
        }
        Commands::Transactions => {
            for tx in api.subscriptions().transactions().await? {
                println!(
                    "- {} {} to {} via {}: {:.2}",
                    tx.package,
                    tx.start(),
                    tx.end(),
                    tx.payment_method,
                    tx.amount
                );
            }
        }
        Commands::Search { query, filter } => {
            println!("Searching for '{}'...", query);
            let mut results = api.search().search(query).await?;
            if let Some(filter_text) = filter {
                results = search::filter(results, filter_text);
            }
            for (i, hit) in results.iter().enumerate() {
                println!("{}. [{}] {} - {} (ID: {})", i + 1, hit.kind, hit.title, hit.creator, hit.id);
            }
        }
    }

    Ok(())
}

fn print_playlist(detail: &PlaylistDetail) {
    let playlist = &detail.playlist;
    println!("{} ({})", playlist.title, playlist.duration_formatted());
    if !playlist.description.is_empty() {
        println!("   {}", playlist.description);
    }
    for (i, song) in detail.songs.iter().enumerate() {
        println!("   {}. {} - {} ({})", i + 1, song.artist, song.title, song.duration_formatted());
    }
}
