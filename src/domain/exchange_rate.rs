//! Exchange-rate record extracted from one rate-sheet snapshot

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One published exchange-rate row for a single currency.
///
/// The nine rate/spread fields are always populated; 0.0 stands in for a
/// column the bank did not publish and is indistinguishable from a true
/// zero. The two datetimes are optional header metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateRecord {
    /// 기준일 - calendar date the rates apply to
    pub base_date: NaiveDate,

    /// Currency code from configuration, not from the page
    pub currency_code: String,

    /// 고시회차 - which same-day publication this is
    pub announcement_sequence: i32,

    /// Publication type label (e.g. "FIRST")
    pub announcement_type: String,

    /// 현찰 살 때 환율
    pub cash_buy: f64,

    /// 현찰 살 때 Spread
    pub cash_buy_spread: f64,

    /// 현찰 팔 때 환율
    pub cash_sell: f64,

    /// 현찰 팔 때 Spread
    pub cash_sell_spread: f64,

    /// 송금 보낼 때 환율
    pub remit_send: f64,

    /// 송금 받을 때 환율
    pub remit_receive: f64,

    /// 외화 수표 팔 때 환율
    pub check_sell: f64,

    /// 매매기준율
    pub rate: f64,

    /// 환가료율
    pub exchange_fee_rate: f64,

    /// 미화 환산율
    pub conversion_rate: f64,

    /// 고시일시 - when this rate sheet was published
    pub announcement_datetime: Option<NaiveDateTime>,

    /// 조회시각 - when the page was queried
    pub query_datetime: Option<NaiveDateTime>,
}

impl ExchangeRateRecord {
    /// Natural key used by the persistence layer for upserts.
    pub fn natural_key(&self) -> (NaiveDate, &str, i32) {
        (self.base_date, &self.currency_code, self.announcement_sequence)
    }
}
