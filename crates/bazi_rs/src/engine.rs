//! One configured engine and the full-chart result type.

use bazi_base::fortune::decade_anchors;
use bazi_base::geju::{PatternTrend, pattern_trend};
use bazi_base::shensha::{StarCombination, StarScore};
use bazi_base::{
    AnnotatedChart, Fortune, GeJuAnalysis, Gender, LiuRi, LiuShi, PillarSpec, SolarDate,
    analyze_patterns,
};
use bazi_config::EngineConfig;
use bazi_search::{
    AstronomicalCalendar, BirthChart, SearchError, Sect, YearMatches, YearResolver,
    chart_from_ganzhi, chart_from_lunar, chart_from_solar, fortune_for_birth, liu_ri_for_month,
    liu_shi_for_date,
};
use bazi_time::LunarDate;
use serde::Serialize;
use tracing::debug;

use crate::date::BirthDate;

/// A chart with every analysis layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullChart {
    /// Civil birth moment; `None` for a literal chart the calendar could
    /// not place.
    pub birth: Option<BirthDate>,
    pub sect: u8,
    pub chart: AnnotatedChart,
    pub geju: GeJuAnalysis,
    pub star_score: StarScore,
    pub star_combinations: Vec<StarCombination>,
    /// Present whenever `birth` is.
    pub fortune: Option<Fortune>,
    /// Main pattern evaluated over the decade periods.
    pub trend: Option<PatternTrend>,
}

/// Validated configuration plus the calendar it implies.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    config: EngineConfig,
    calendar: AstronomicalCalendar,
    sect: Sect,
    liu_yue_year: Option<i32>,
    current_year: Option<i32>,
}

impl Default for Engine {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            calendar: AstronomicalCalendar::new(config.utc_offset_hours),
            config,
            sect: Sect::default(),
            liu_yue_year: None,
            current_year: None,
        }
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            calendar: AstronomicalCalendar::new(config.utc_offset_hours),
            sect: Sect::from_code(config.sect)?,
            config,
            liu_yue_year: None,
            current_year: None,
        })
    }

    /// List monthly periods for `year` instead of the commencement year.
    pub fn with_liu_yue_year(mut self, year: i32) -> Self {
        self.liu_yue_year = Some(year);
        self
    }

    /// Pin "now" for year resolution instead of reading the clock.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = Some(year);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn sect(&self) -> Sect {
        self.sect
    }

    pub fn resolver(&self) -> Result<YearResolver<'_, AstronomicalCalendar>, SearchError> {
        let resolver = YearResolver::new(&self.calendar, &self.config)?;
        Ok(match self.current_year {
            Some(year) => resolver.with_current_year(year),
            None => resolver,
        })
    }

    /// Full chart of a Gregorian civil moment.
    pub fn analyze_solar(
        &self,
        date: &BirthDate,
        gender: Gender,
    ) -> Result<FullChart, SearchError> {
        let bc = chart_from_solar(&self.calendar, &date.to_civil(), gender, self.sect)?;
        self.complete(bc)
    }

    /// Full chart of a lunar date at a civil hour and minute.
    pub fn analyze_lunar(
        &self,
        date: LunarDate,
        hour: u32,
        minute: u32,
        gender: Gender,
    ) -> Result<FullChart, SearchError> {
        let bc = chart_from_lunar(&self.calendar, date, hour, minute, gender, self.sect)?;
        self.complete(bc)
    }

    /// Full chart of a literal four-pillar string, placed in time nearest
    /// `hint_year` when the calendar can find it.
    pub fn analyze_ganzhi(
        &self,
        pillars: &str,
        gender: Gender,
        hint_year: Option<i32>,
    ) -> Result<FullChart, SearchError> {
        let resolver = self.resolver()?;
        let bc = chart_from_ganzhi(&resolver, pillars, gender, hint_year)?;
        self.complete(bc)
    }

    /// Years consistent with a partial pillar string ("庚午 * * 丙子").
    pub fn matching_years(&self, spec: &str) -> Result<YearMatches, SearchError> {
        let spec: PillarSpec = spec.parse()?;
        Ok(self.resolver()?.matching_years(&spec))
    }

    /// Matching year closest to `hint`, else to the current year.
    pub fn find_most_likely_year(
        &self,
        spec: &str,
        hint: Option<i32>,
    ) -> Result<Option<i32>, SearchError> {
        let spec: PillarSpec = spec.parse()?;
        Ok(self.resolver()?.find_most_likely_year(&spec, hint))
    }

    /// Daily periods of month `month_index` (0 = 寅) of sexagenary `year`.
    pub fn liu_ri(
        &self,
        chart: &AnnotatedChart,
        year: i32,
        month_index: usize,
    ) -> Result<Vec<LiuRi>, SearchError> {
        liu_ri_for_month(chart, year, month_index)
    }

    /// Double-hour periods of the day of `date` under the engine's sect.
    pub fn liu_shi(&self, chart: &AnnotatedChart, date: SolarDate) -> Vec<LiuShi> {
        liu_shi_for_date(chart, date, self.sect)
    }

    fn complete(&self, bc: BirthChart) -> Result<FullChart, SearchError> {
        let BirthChart { chart, birth } = bc;
        let geju = analyze_patterns(&chart);
        let fortune = match &birth {
            Some(t) => Some(fortune_for_birth(
                &self.calendar,
                &chart,
                t,
                &self.config,
                self.liu_yue_year,
            )?),
            None => None,
        };
        let trend = fortune.as_ref().map(|f| {
            pattern_trend(geju.main.name, chart.day_element(), &decade_anchors(&f.da_yun))
        });
        debug!(
            pillars = %chart.raw(),
            pattern = geju.main.name.name(),
            dated = birth.is_some(),
            "full chart"
        );
        Ok(FullChart {
            birth: birth.map(BirthDate::from),
            sect: self.sect.code(),
            star_score: chart.star_score(),
            star_combinations: chart.star_combinations(),
            geju,
            fortune,
            trend,
            chart,
        })
    }
}
