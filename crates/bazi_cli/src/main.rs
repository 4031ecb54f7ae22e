use std::fmt::Display;
use std::path::{Path, PathBuf};

use bazi_rs::{
    ALL_STARS, AnnotatedChart, BirthDate, Engine, EngineConfig, FullChart, GanZhi, Gender,
    LunarDate, SolarDate, Star, category_of, next_year_for_ganzhi, parse_four_pillars, star_info,
    strip_prefix, year_to_ganzhi,
};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing::{Level, debug};

#[derive(Parser)]
#[command(name = "bazi", about = "BaZi four pillars CLI")]
struct Cli {
    /// JSON engine config; defaults apply when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Day boundary school: 1 (day turns at 23:00) or 2 (at midnight)
    #[arg(long, global = true)]
    sect: Option<u8>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart from a solar date, a lunar date or literal pillars
    Chart {
        /// Solar birth time (YYYY-MM-DD HH:MM)
        #[arg(long, conflicts_with_all = ["lunar", "ganzhi"])]
        date: Option<String>,
        /// Lunar birth date (YYYY-MM-DD)
        #[arg(long, conflicts_with = "ganzhi")]
        lunar: Option<String>,
        /// The lunar month is the leap month
        #[arg(long, requires = "lunar")]
        leap: bool,
        /// Clock time for --lunar (HH:MM)
        #[arg(long, default_value = "12:00")]
        time: String,
        /// Four pillars, e.g. "甲子 丙寅 戊辰 庚申"
        #[arg(long)]
        ganzhi: Option<String>,
        /// Year to place --ganzhi near
        #[arg(long, requires = "ganzhi")]
        hint: Option<i32>,
        /// male or female
        #[arg(long, default_value = "male")]
        gender: String,
        /// Year whose monthly periods are listed
        #[arg(long)]
        liu_yue_year: Option<i32>,
    },
    /// Four pillars of a solar moment
    Pillars {
        /// Solar time (YYYY-MM-DD HH:MM)
        date: String,
    },
    /// Year pillar of a Gregorian year
    Ganzhi {
        /// Gregorian year
        year: i32,
    },
    /// Years consistent with a pillar pattern ("庚午 * * 丙子")
    MatchYears {
        spec: String,
        /// Prefer the match closest to this year
        #[arg(long)]
        hint: Option<i32>,
    },
    /// First year after --from carrying a year pillar
    NextYear {
        /// Year pillar, e.g. 甲子
        ganzhi: String,
        #[arg(long)]
        from: i32,
    },
    /// Daily periods of one solar month for a chart
    Days {
        /// Four pillars, e.g. "甲子 丙寅 戊辰 庚申"
        ganzhi: String,
        /// Sexagenary year
        year: i32,
        /// Solar month, 1 (正月, 寅) to 12 (腊月, 丑)
        month: usize,
        #[arg(long, default_value = "male")]
        gender: String,
    },
    /// Double-hour periods of one day for a chart
    Hours {
        /// Four pillars, e.g. "甲子 丙寅 戊辰 庚申"
        ganzhi: String,
        /// Civil date (YYYY-MM-DD)
        date: String,
        #[arg(long, default_value = "male")]
        gender: String,
    },
    /// List every computed star
    Stars,
    /// Description of one star
    StarInfo {
        /// Star name, optionally with a pillar prefix ("年柱:天乙贵人")
        name: String,
    },
}

fn exit_with(msg: impl Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>, sect: Option<u8>) -> EngineConfig {
    let mut config = EngineConfig::load_or_default(path)
        .unwrap_or_else(|e| exit_with(format!("Failed to load config: {e}")));
    if let Some(sect) = sect {
        config.sect = sect;
    }
    debug!(?config, "config loaded");
    config
}

fn build_engine(config: EngineConfig) -> Engine {
    Engine::new(config).unwrap_or_else(|e| exit_with(format!("Invalid config: {e}")))
}

fn parse_gender(s: &str) -> Gender {
    match s.trim().to_ascii_lowercase().as_str() {
        "male" | "m" | "男" | "1" => Gender::Male,
        "female" | "f" | "女" | "0" => Gender::Female,
        _ => {
            eprintln!("Invalid gender: {s}");
            eprintln!("Valid: male, female");
            std::process::exit(1);
        }
    }
}

fn parse_ganzhi(s: &str) -> GanZhi {
    s.parse()
        .unwrap_or_else(|e| exit_with(format!("Invalid ganzhi '{s}': {e}")))
}

fn parse_birth(s: &str) -> BirthDate {
    s.parse().unwrap_or_else(|e| exit_with(e))
}

fn parse_lunar(date: &str, leap: bool) -> LunarDate {
    let parts: Vec<&str> = date.trim().split('-').collect();
    let [y, m, d] = parts.as_slice() else {
        exit_with(format!("Invalid lunar date: {date} (expected YYYY-MM-DD)"));
    };
    let (Ok(year), Ok(month), Ok(day)) = (y.parse(), m.parse(), d.parse()) else {
        exit_with(format!("Invalid lunar date: {date}"));
    };
    LunarDate {
        year,
        month,
        day,
        is_leap: leap,
    }
}

fn parse_solar_date(s: &str) -> SolarDate {
    let parts: Vec<&str> = s.trim().split('-').collect();
    let [y, m, d] = parts.as_slice() else {
        exit_with(format!("Invalid date: {s} (expected YYYY-MM-DD)"));
    };
    match (y.parse(), m.parse(), d.parse()) {
        (Ok(y), Ok(m @ 1..=12), Ok(d @ 1..=31)) => SolarDate::new(y, m, d),
        _ => exit_with(format!("Invalid date: {s}")),
    }
}

fn parse_chart(pillars: &str, gender: &str) -> AnnotatedChart {
    let raw = parse_four_pillars(pillars)
        .unwrap_or_else(|e| exit_with(format!("Invalid pillars '{pillars}': {e}")));
    AnnotatedChart::annotate(raw, parse_gender(gender))
}

fn parse_clock(s: &str) -> (u32, u32) {
    let Some((h, m)) = s.trim().split_once(':') else {
        exit_with(format!("Invalid time: {s} (expected HH:MM)"));
    };
    match (h.parse(), m.parse()) {
        (Ok(h), Ok(m)) => (h, m),
        _ => exit_with(format!("Invalid time: {s}")),
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => exit_with(format!("JSON encoding failed: {e}")),
    }
}

fn join<T: Display>(items: impl IntoIterator<Item = T>, sep: &str) -> String {
    items
        .into_iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

fn print_chart(full: &FullChart) {
    let chart = &full.chart;
    match &full.birth {
        Some(b) => println!("出生: {b}"),
        None => println!("出生: 未能定位"),
    }
    println!("性别: {}", chart.gender());
    println!("四柱: {}", chart.raw());
    println!();

    for p in chart.pillars() {
        let shishen = p
            .stem_shishen
            .map_or_else(|| "日主".to_string(), |s| s.to_string());
        println!(
            "{} {}  {}  藏干 {} ({})  {}  {}  空亡 {}{}",
            p.kind.name(),
            p.ganzhi,
            shishen,
            join(p.hidden_stems.iter(), ""),
            join(p.hidden_shishen.iter(), " "),
            p.nayin,
            p.dishi.name(),
            p.xunkong[0],
            p.xunkong[1],
        );
        if !p.stars.is_empty() {
            println!("    神煞: {}", join(p.stars.iter(), " "));
        }
    }

    let strength = chart.strength();
    let extras = chart.extras();
    println!();
    println!("日主: {} ({:.2})", strength.level.name(), strength.ratio);
    println!(
        "胎元 {}  命宫 {}  生肖 {}",
        extras.tai_yuan, extras.ming_gong, extras.sheng_xiao
    );

    let geju = &full.geju;
    println!();
    println!(
        "格局: {} (强度 {:.0}) {}",
        geju.main.name, geju.main.strength, geju.main.detail
    );
    if !geju.assistants.is_empty() {
        println!("辅格: {}", join(geju.assistants.iter().map(|p| p.name), " "));
    }
    println!("用神: {} ({})", geju.yong_shen.god.name(), geju.yong_shen.rationale);
    for f in &geju.factors {
        println!("  {} +{}: {}", f.factor, f.contribution, f.description);
    }
    println!("{} [{}]", geju.reading.analysis, geju.reading.level.name());
    println!("{}", geju.reading.suggestion);

    let score = &full.star_score;
    println!();
    println!(
        "神煞评分: 吉 {} 凶 {} 合计 {} ({})",
        score.good_score,
        score.bad_score,
        score.total,
        score.tier.name()
    );
    for c in &full.star_combinations {
        println!(
            "  {}+{} [{}] {}",
            c.stars[0],
            c.stars[1],
            c.category.name(),
            c.effect
        );
    }

    if let Some(f) = &full.fortune {
        println!();
        let note = if f.commencement.estimated { " (估算)" } else { "" };
        println!(
            "{}  起运 {}{}  交运 {}",
            f.direction.name(),
            f.commencement,
            note,
            f.commencement_date
        );
        println!("大运:");
        for d in &f.da_yun {
            println!(
                "  {:>2}. {} {}-{} ({}-{}岁) {} {}",
                d.index,
                d.facts.ganzhi,
                d.start_year,
                d.end_year,
                d.start_age,
                d.end_age,
                d.facts.stem_shishen,
                d.facts.dishi.name()
            );
        }
        if !f.xiao_yun.is_empty() {
            println!(
                "小运: {}",
                join(
                    f.xiao_yun.iter().map(|x| format!("{}({}岁)", x.facts.ganzhi, x.age)),
                    " "
                )
            );
        }
        println!("流年:");
        for n in &f.liu_nian {
            println!(
                "  {} {} {}岁 {}",
                n.year,
                n.facts.ganzhi,
                n.age,
                join(n.facts.stars.iter(), " ")
            );
        }
        if let Some(first) = f.liu_yue.first() {
            println!("流月 ({}):", first.year);
        }
        for m in &f.liu_yue {
            let span = m
                .span
                .map(|s| format!("{} {} ~ {}", s.jie, s.start, s.end))
                .unwrap_or_default();
            println!("  {} {} {}", m.label, m.facts.ganzhi, span);
        }
    }

    if let Some(t) = &full.trend {
        println!();
        println!("运势: {} {}", t.verdict.name(), t.summary);
        for k in &t.key_years {
            println!("  {} {} [{}]", k.year, k.event, k.level.name());
        }
        println!("{}", t.suggestion);
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(cli.config.as_deref(), cli.sect);

    match cli.command {
        Commands::Chart {
            date,
            lunar,
            leap,
            time,
            ganzhi,
            hint,
            gender,
            liu_yue_year,
        } => {
            let gender = parse_gender(&gender);
            let mut engine = build_engine(config);
            if let Some(year) = liu_yue_year {
                engine = engine.with_liu_yue_year(year);
            }
            let result = match (date, lunar, ganzhi) {
                (Some(d), _, _) => engine.analyze_solar(&parse_birth(&d), gender),
                (None, Some(l), _) => {
                    let (hour, minute) = parse_clock(&time);
                    engine.analyze_lunar(parse_lunar(&l, leap), hour, minute, gender)
                }
                (None, None, Some(g)) => engine.analyze_ganzhi(&g, gender, hint),
                (None, None, None) => exit_with("One of --date, --lunar or --ganzhi is required"),
            };
            let full = result.unwrap_or_else(|e| exit_with(format!("Chart failed: {e}")));
            if cli.json {
                print_json(&full);
            } else {
                print_chart(&full);
            }
        }

        Commands::Pillars { date } => {
            let engine = build_engine(config);
            let full = engine
                .analyze_solar(&parse_birth(&date), Gender::Male)
                .unwrap_or_else(|e| exit_with(format!("Chart failed: {e}")));
            if cli.json {
                print_json(full.chart.raw());
            } else {
                println!("{}", full.chart.raw());
            }
        }

        Commands::Ganzhi { year } => {
            let gz = year_to_ganzhi(year);
            if cli.json {
                print_json(&serde_json::json!({ "year": year, "ganzhi": gz }));
            } else {
                println!("{year}: {gz}");
            }
        }

        Commands::MatchYears { spec, hint } => {
            let engine = build_engine(config);
            let matches = engine
                .matching_years(&spec)
                .unwrap_or_else(|e| exit_with(format!("Invalid pattern: {e}")));
            let likely = engine
                .find_most_likely_year(&spec, hint)
                .unwrap_or_else(|e| exit_with(format!("Invalid pattern: {e}")));
            if cli.json {
                print_json(&serde_json::json!({
                    "tier": matches.tier,
                    "years": matches.years,
                    "most_likely": likely,
                }));
            } else {
                println!("{} ({} years)", matches.tier.name(), matches.years.len());
                println!("{}", join(matches.years.iter(), " "));
                match likely {
                    Some(y) => println!("Most likely: {y}"),
                    None => println!("No matching year"),
                }
            }
        }

        Commands::NextYear { ganzhi, from } => {
            let year = next_year_for_ganzhi(from, parse_ganzhi(&ganzhi));
            if cli.json {
                print_json(&serde_json::json!({ "from": from, "year": year }));
            } else {
                println!("{year}");
            }
        }

        Commands::Days {
            ganzhi,
            year,
            month,
            gender,
        } => {
            let chart = parse_chart(&ganzhi, &gender);
            let engine = build_engine(config);
            let days = engine
                .liu_ri(&chart, year, month.wrapping_sub(1))
                .unwrap_or_else(|e| exit_with(format!("Days failed: {e}")));
            if cli.json {
                print_json(&days);
            } else {
                for d in &days {
                    println!(
                        "{:>2}. {} {} {} {} {}",
                        d.index,
                        d.date,
                        d.facts.ganzhi,
                        d.facts.stem_shishen,
                        d.facts.dishi.name(),
                        join(d.facts.stars.iter(), " ")
                    );
                }
            }
        }

        Commands::Hours {
            ganzhi,
            date,
            gender,
        } => {
            let chart = parse_chart(&ganzhi, &gender);
            let engine = build_engine(config);
            let hours = engine.liu_shi(&chart, parse_solar_date(&date));
            if cli.json {
                print_json(&hours);
            } else {
                for h in &hours {
                    println!(
                        "{} {} {} {} {} {}",
                        h.label,
                        h.date,
                        h.range(),
                        h.facts.ganzhi,
                        h.facts.stem_shishen,
                        h.facts.dishi.name()
                    );
                }
            }
        }

        Commands::Stars => {
            if cli.json {
                let infos: Vec<_> = ALL_STARS.iter().map(|&s| star_info(s)).collect();
                print_json(&infos);
            } else {
                for star in ALL_STARS {
                    println!("{}  {}", star.name(), star.category().name());
                }
            }
        }

        Commands::StarInfo { name } => match Star::from_name(strip_prefix(&name)) {
            Some(star) => {
                let info = star_info(star);
                if cli.json {
                    print_json(&info);
                } else {
                    println!("{} [{}]", info.name, info.category.name());
                    println!("{}", info.description);
                    println!("{}", info.effect);
                }
            }
            None => {
                let category = category_of(&name);
                if cli.json {
                    print_json(&serde_json::json!({ "name": name, "category": category }));
                } else {
                    println!("{name} [{}] (not computed)", category.name());
                }
            }
        },
    }
}
