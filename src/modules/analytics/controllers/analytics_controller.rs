use actix_web::{http::StatusCode, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{ApiResponse, Result};
use crate::middleware::RequestIdValue;
use crate::modules::analytics::models::{
    AxisScale, CategoryShare, EntityRankEntry, ReportPeriod, SalesReport, TrendScale, WeekPoint,
};
use crate::modules::analytics::services::date_range_validator::DATE_FORMAT;
use crate::modules::analytics::services::AnalyticsService;

pub const SUCCESS_MESSAGE: &str = "Sales analytics retrieved";

/// Query parameters for the sales analytics endpoint.
///
/// Both are optional at the HTTP layer so a missing one surfaces as `MISSING_RANGE`
/// instead of a generic query error.
#[derive(Debug, Default, Deserialize)]
pub struct SalesAnalyticsQuery {
    /// First day of the range (YYYY-MM-DD)
    #[serde(default, alias = "startDate")]
    pub start: Option<String>,
    /// Last day of the range (YYYY-MM-DD)
    #[serde(default, alias = "endDate")]
    pub end: Option<String>,
}

/// Response structure for sales analytics
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesAnalyticsResponse {
    pub total_sale: i64,
    pub total_orders: i64,
    pub period: PeriodResponse,
    pub trend: Vec<TrendPointResponse>,
    pub trend_scale: TrendScaleResponse,
    pub product_share: Vec<ProductShareResponse>,
    pub top_customers: Vec<TopCustomerResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodResponse {
    pub start: String,
    pub end: String,
    pub week_start: String,
    pub week_end: String,
    pub week_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPointResponse {
    pub year: i32,
    pub month: u32,
    pub week: u32,
    pub sale: i64,
    pub order_count: i64,
}

#[derive(Debug, Serialize)]
pub struct ScaleResponse {
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendScaleResponse {
    pub sale: ScaleResponse,
    pub order_count: ScaleResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductShareResponse {
    pub product_code: String,
    pub product_name: String,
    pub sale: i64,
    pub sale_share: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCustomerResponse {
    pub customer_code: String,
    pub customer_name: String,
    pub order_count: i64,
    pub sale: i64,
    pub active: bool,
}

impl From<SalesReport> for SalesAnalyticsResponse {
    fn from(report: SalesReport) -> Self {
        Self {
            total_sale: report.total_sales,
            total_orders: report.total_orders,
            period: PeriodResponse::from(report.period),
            trend: report.series.into_iter().map(TrendPointResponse::from).collect(),
            trend_scale: TrendScaleResponse::from(report.scale),
            product_share: report
                .category_shares
                .into_iter()
                .map(ProductShareResponse::from)
                .collect(),
            top_customers: report
                .entity_ranking
                .into_iter()
                .map(TopCustomerResponse::from)
                .collect(),
        }
    }
}

impl From<ReportPeriod> for PeriodResponse {
    fn from(period: ReportPeriod) -> Self {
        Self {
            start: period.start.format(DATE_FORMAT).to_string(),
            end: period.end.format(DATE_FORMAT).to_string(),
            week_start: period.week_start.format(DATE_FORMAT).to_string(),
            week_end: period.week_end.format(DATE_FORMAT).to_string(),
            week_count: period.week_count,
        }
    }
}

impl From<WeekPoint> for TrendPointResponse {
    fn from(point: WeekPoint) -> Self {
        Self {
            year: point.week_based_year,
            month: point.representative_month,
            week: point.week_of_year,
            sale: point.sales_amount,
            order_count: point.order_count,
        }
    }
}

impl From<AxisScale> for ScaleResponse {
    fn from(axis: AxisScale) -> Self {
        Self {
            min: axis.min,
            max: axis.max,
        }
    }
}

impl From<TrendScale> for TrendScaleResponse {
    fn from(scale: TrendScale) -> Self {
        Self {
            sale: scale.sales.into(),
            order_count: scale.orders.into(),
        }
    }
}

impl From<CategoryShare> for ProductShareResponse {
    fn from(share: CategoryShare) -> Self {
        Self {
            product_code: share.code,
            product_name: share.name,
            sale: share.sales,
            sale_share: f64::from(share.share_percent),
        }
    }
}

impl From<EntityRankEntry> for TopCustomerResponse {
    fn from(entry: EntityRankEntry) -> Self {
        Self {
            customer_code: entry.code,
            customer_name: entry.name,
            order_count: entry.order_count,
            sale: entry.sales,
            active: entry.active,
        }
    }
}

/// GET /api/business/sd/analytics/sales
///
/// Returns the weekly trend, axis scale, product share and top customers for the
/// week-aligned range.
pub async fn get_sales_analytics(
    service: web::Data<AnalyticsService>,
    query: web::Query<SalesAnalyticsQuery>,
    request_id: Option<web::ReqData<RequestIdValue>>,
) -> Result<HttpResponse> {
    let report = service
        .generate_sales_report(query.start.as_deref(), query.end.as_deref())
        .map_err(|e| {
            warn!(
                request_id = request_id.as_deref().map_or("-", |id| id.0.as_str()),
                code = e.code(),
                start = ?query.start,
                end = ?query.end,
                "Sales analytics request rejected: {}",
                e
            );
            e
        })?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SalesAnalyticsResponse::from(report),
        SUCCESS_MESSAGE,
        StatusCode::OK,
    )))
}

/// Configure routes for analytics module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/business/sd/analytics").route("/sales", web::get().to(get_sales_analytics)),
    );
}
