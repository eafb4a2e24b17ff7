use serde::Serialize;

/// Headline figure for the about page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndustryStat {
    pub label: &'static str,
    pub value: &'static str,
}

/// One row of the producer comparison table, also served as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldRow {
    pub country: &'static str,
    pub oil_production: &'static str,
    pub gas_production: &'static str,
    pub reserves_oil: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub event: &'static str,
}

static INDUSTRY_STATS: [IndustryStat; 5] = [
    IndustryStat { label: "Добыча нефти", value: "≈ 10,6 млн барр./сут" },
    IndustryStat { label: "Добыча газа", value: "≈ 636 млрд м³ в год" },
    IndustryStat { label: "Доля в доходах бюджета", value: "≈ 30%" },
    IndustryStat { label: "Протяжённость магистральных трубопроводов", value: "> 250 тыс. км" },
    IndustryStat { label: "Занятые в отрасли", value: "≈ 1,5 млн человек" },
];

static WORLD_COMPARISON: [WorldRow; 5] = [
    WorldRow {
        country: "США",
        oil_production: "12,9 млн барр./сут",
        gas_production: "1035 млрд м³",
        reserves_oil: "55 млрд барр.",
    },
    WorldRow {
        country: "Россия",
        oil_production: "10,6 млн барр./сут",
        gas_production: "586 млрд м³",
        reserves_oil: "80 млрд барр.",
    },
    WorldRow {
        country: "Саудовская Аравия",
        oil_production: "9,6 млн барр./сут",
        gas_production: "114 млрд м³",
        reserves_oil: "267 млрд барр.",
    },
    WorldRow {
        country: "Канада",
        oil_production: "4,9 млн барр./сут",
        gas_production: "190 млрд м³",
        reserves_oil: "170 млрд барр.",
    },
    WorldRow {
        country: "Ирак",
        oil_production: "4,4 млн барр./сут",
        gas_production: "10 млрд м³",
        reserves_oil: "145 млрд барр.",
    },
];

static TIMELINE: [TimelineEntry; 7] = [
    TimelineEntry { year: "1846", event: "Первая в мире механически пробуренная нефтяная скважина в Биби-Эйбате" },
    TimelineEntry { year: "1878", event: "Построен первый российский нефтепровод Балаханы — Чёрный город" },
    TimelineEntry { year: "1932", event: "Начало добычи нефти в Волго-Уральском районе («Второе Баку»)" },
    TimelineEntry { year: "1960", event: "Открыто Шаимское месторождение, первая нефть Западной Сибири" },
    TimelineEntry { year: "1966", event: "Открыто Уренгойское газовое месторождение" },
    TimelineEntry { year: "1989", event: "Создан государственный газовый концерн «Газпром»" },
    TimelineEntry { year: "2019", event: "Запущен газопровод «Сила Сибири» в Китай" },
];

pub fn industry_stats() -> &'static [IndustryStat] {
    &INDUSTRY_STATS
}

pub fn world_comparison() -> &'static [WorldRow] {
    &WORLD_COMPARISON
}

pub fn timeline() -> &'static [TimelineEntry] {
    &TIMELINE
}
