// Projection of raw markets JSON onto MarketRecord
use crate::model::{MarketRecord, MarketTable, ParserError};
use serde_json::{Map, Value};

pub fn parse_market_table(raw: &[Value]) -> Result<MarketTable, ParserError> {
    let records = raw
        .iter()
        .enumerate()
        .map(|(index, value)| parse_record(index, value))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MarketTable::new(records))
}

fn parse_record(index: usize, value: &Value) -> Result<MarketRecord, ParserError> {
    let obj = value.as_object().ok_or(ParserError::InvalidField {
        index,
        field: "record",
    })?;

    Ok(MarketRecord {
        name: text_field(obj, index, "name")?,
        symbol: text_field(obj, index, "symbol")?,
        current_price: number_field(obj, index, "current_price")?,
        market_cap: number_field(obj, index, "market_cap")?,
        total_volume: number_field(obj, index, "total_volume")?,
        price_change_percentage_24h: number_field(obj, index, "price_change_percentage_24h")?,
    })
}

fn lookup<'a>(
    obj: &'a Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<&'a Value, ParserError> {
    obj.get(field)
        .ok_or(ParserError::MissingField { index, field })
}

/// Names and symbols are required; `null` counts as missing.
fn text_field(
    obj: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<String, ParserError> {
    match lookup(obj, index, field)? {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Err(ParserError::MissingField { index, field }),
        _ => Err(ParserError::InvalidField { index, field }),
    }
}

/// The key must be present, but the endpoint may send `null` for coins it has no figure for.
fn number_field(
    obj: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<Option<f64>, ParserError> {
    match lookup(obj, index, field)? {
        Value::Null => Ok(None),
        v => v
            .as_f64()
            .map(Some)
            .ok_or(ParserError::InvalidField { index, field }),
    }
}
