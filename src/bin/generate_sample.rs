//! Write a synthetic top-ten CSV in the upstream export layout:
//! a leading unnamed index column, capitalised headers, and collaborations
//! listed once per contributing artist under the same `Uri`.
//!
//! ```bash
//! cargo run --bin generate_sample               # → data/data.csv
//! cargo run --bin generate_sample -- out.csv
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};

const HEADER: [&str; 19] = [
    "",
    "Artist",
    "Url_spotify",
    "Track",
    "Album",
    "Uri",
    "Danceability",
    "Energy",
    "Key",
    "Speechiness",
    "Acousticness",
    "Instrumentalness",
    "Liveness",
    "Valence",
    "Url_youtube",
    "Channel",
    "Views",
    "Likes",
    "Stream",
];

const ARTISTS: [&str; 8] = [
    "Gorillaz",
    "Daft Punk",
    "BTS",
    "Rosalía",
    "Bad Bunny",
    "Dua Lipa",
    "Khruangbin",
    "Arctic Monkeys",
];

const WORDS: [&str; 12] = [
    "Midnight", "Echo", "Paper", "Neon", "Gold", "River", "Static", "Velvet", "Signal", "Glass",
    "Summer", "Ghost",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Log-uniform count between `lo` and `hi`.
    fn count(&mut self, lo: f64, hi: f64) -> f64 {
        (lo.ln() + self.next_f64() * (hi.ln() - lo.ln())).exp().round()
    }
}

/// One generated track; written once per contributing artist.
struct Track {
    uri: String,
    title: String,
    album: String,
    scores: [f64; 7],
    key: u64,
    views: Option<f64>,
    likes: Option<f64>,
    stream: f64,
    youtube: Option<String>,
}

fn generate_track(rng: &mut SimpleRng, id: usize) -> Track {
    let title = format!("{} {}", rng.pick(&WORDS), rng.pick(&WORDS));
    let album = format!("{} Sessions", rng.pick(&WORDS));
    let mut scores = [0.0; 7];
    for s in &mut scores {
        *s = (rng.next_f64() * 1000.0).round() / 1000.0;
    }
    let has_video = rng.next_f64() > 0.1;
    let views = has_video.then(|| rng.count(1e5, 2e9));
    Track {
        uri: format!("spotify:track:{id:022}"),
        title,
        album,
        scores,
        key: rng.next_u64() % 12,
        likes: views.map(|v| (v * (0.005 + rng.next_f64() * 0.02)).round()),
        views,
        stream: rng.count(1e6, 3e9),
        youtube: has_video.then(|| format!("https://www.youtube.com/watch?v=sample{id}")),
    }
}

fn record(index: usize, artist: &str, t: &Track) -> Vec<String> {
    let opt = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
    let mut row = vec![
        index.to_string(),
        artist.to_string(),
        format!("https://open.spotify.com/artist/{}", artist.replace(' ', "")),
        t.title.clone(),
        t.album.clone(),
        t.uri.clone(),
        t.scores[0].to_string(),
        t.scores[1].to_string(),
        t.key.to_string(),
    ];
    row.extend(t.scores[2..].iter().map(|s| s.to_string()));
    row.extend([
        t.youtube.clone().unwrap_or_default(),
        format!("{artist} - Topic"),
        opt(t.views),
        opt(t.likes),
        t.stream.to_string(),
    ]);
    row
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/data.csv"));

    if let Some(dir) = output_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
    }

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    writer.write_record(HEADER)?;

    let mut index = 0;
    let mut track_id = 0;
    for (a, artist) in ARTISTS.iter().enumerate() {
        for slot in 0..10 {
            let track = generate_track(&mut rng, track_id);
            track_id += 1;

            writer.write_record(record(index, artist, &track))?;
            index += 1;

            // Last slot is a feature with the next artist: same Uri, listed
            // under both names.
            if slot == 9 {
                let partner = ARTISTS[(a + 1) % ARTISTS.len()];
                writer.write_record(record(index, partner, &track))?;
                index += 1;
            }
        }
    }
    writer.flush()?;

    println!(
        "Wrote {index} rows ({track_id} distinct tracks) to {}",
        output_path.display()
    );
    Ok(())
}
