use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuelPrice {
    pub fuel: &'static str,
    pub price: &'static str,
}

// Approximate retail prices; there is no live source for these.
static FUEL_PRICES: [FuelPrice; 4] = [
    FuelPrice { fuel: "АИ-95", price: "55.80 ₽" },
    FuelPrice { fuel: "АИ-92", price: "51.20 ₽" },
    FuelPrice { fuel: "Дизель", price: "58.90 ₽" },
    FuelPrice { fuel: "Газ (пропан)", price: "32.50 ₽" },
];

pub fn fuel_prices() -> &'static [FuelPrice] {
    &FUEL_PRICES
}
