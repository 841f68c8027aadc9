use async_trait::async_trait;
use contracts::dashboards::metrics::DashboardMetrics;
use contracts::domain::adviser::requests::{AddSaleRequest, GoalRequest, MonthlySalesRequest};
use contracts::domain::adviser::{Adviser, AdviserId, AdviserRepository, AdviserUpdate, NewAdviser};
use contracts::error::{AppError, AppResult};
use gloo_net::http::{Request, RequestBuilder};

use crate::shared::api_utils::api_url;
use crate::shared::date_utils::sale_timestamp;
use crate::system::auth::session::AuthSession;

/// HTTP implementation of the adviser contract against the KPIs backend.
///
/// Reads are anonymous; mutations carry the bearer token from the
/// injected session when one exists.
pub struct AdviserApiRepository {
    session: AuthSession,
}

impl AdviserApiRepository {
    pub fn new(session: AuthSession) -> Self {
        Self { session }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.bearer() {
            Some(bearer) => builder.header("Authorization", &bearer),
            None => builder,
        }
    }
}

#[async_trait(?Send)]
impl AdviserRepository for AdviserApiRepository {
    async fn get_all(&self) -> AppResult<Vec<Adviser>> {
        let response = Request::get(&api_url("/advisers"))
            .send()
            .await
            .map_err(AppError::transport)?;
        if !response.ok() {
            return Err(AppError::http("Error al obtener los asesores"));
        }
        response.json().await.map_err(AppError::transport)
    }

    async fn get_by_id(&self, id: AdviserId) -> AppResult<Option<Adviser>> {
        let response = Request::get(&api_url(&format!("/advisers/{}", id)))
            .send()
            .await
            .map_err(AppError::transport)?;
        if response.status() == 404 {
            return Ok(None);
        }
        if !response.ok() {
            return Err(AppError::http("Error al obtener el asesor"));
        }
        let adviser: Adviser = response.json().await.map_err(AppError::transport)?;
        Ok(Some(adviser))
    }

    async fn create(&self, adviser: &NewAdviser) -> AppResult<Adviser> {
        let response = self
            .authorized(Request::post(&api_url("/advisers")))
            .json(adviser)
            .map_err(AppError::transport)?
            .send()
            .await
            .map_err(AppError::transport)?;
        if !response.ok() {
            return Err(AppError::http("Error al crear el asesor"));
        }
        response.json().await.map_err(AppError::transport)
    }

    async fn update(&self, id: AdviserId, update: &AdviserUpdate) -> AppResult<Adviser> {
        let response = self
            .authorized(Request::put(&api_url(&format!("/advisers/{}", id))))
            .json(update)
            .map_err(AppError::transport)?
            .send()
            .await
            .map_err(AppError::transport)?;
        if response.status() == 404 {
            return Err(AppError::not_found("Asesor no encontrado"));
        }
        if !response.ok() {
            return Err(AppError::http("Error al actualizar el asesor"));
        }
        response.json().await.map_err(AppError::transport)
    }

    async fn delete(&self, id: AdviserId) -> AppResult<()> {
        let response = self
            .authorized(Request::delete(&api_url(&format!("/advisers/{}", id))))
            .send()
            .await
            .map_err(AppError::transport)?;
        if response.status() == 404 {
            return Err(AppError::not_found("Asesor no encontrado"));
        }
        if !response.ok() {
            return Err(AppError::http("Error al eliminar el asesor"));
        }
        Ok(())
    }

    async fn add_sale(&self, adviser_id: AdviserId, amount: f64) -> AppResult<()> {
        let body = AddSaleRequest {
            adviser_id,
            amount,
            sale_date: sale_timestamp(),
        };
        let response = self
            .authorized(Request::post(&api_url("/sales/add")))
            .json(&body)
            .map_err(AppError::transport)?
            .send()
            .await
            .map_err(AppError::transport)?;
        if !response.ok() {
            return Err(AppError::http("Error al agregar la venta"));
        }
        Ok(())
    }

    async fn update_goal(
        &self,
        adviser_id: AdviserId,
        year: i32,
        month: u32,
        goal: f64,
    ) -> AppResult<()> {
        let body = GoalRequest { year, month, goal };
        let response = self
            .authorized(Request::put(&api_url(&format!("/goals/{}", adviser_id))))
            .json(&body)
            .map_err(AppError::transport)?
            .send()
            .await
            .map_err(AppError::transport)?;
        if !response.ok() {
            return Err(AppError::http("Error al actualizar la meta"));
        }
        Ok(())
    }

    async fn update_monthly_sales(
        &self,
        adviser_id: AdviserId,
        year: i32,
        month: u32,
        total_sales: f64,
    ) -> AppResult<()> {
        let body = MonthlySalesRequest {
            year,
            month,
            total_sales,
        };
        let response = self
            .authorized(Request::put(&api_url(&format!(
                "/monthly-summary/by-adviser/{}",
                adviser_id
            ))))
            .json(&body)
            .map_err(AppError::transport)?
            .send()
            .await
            .map_err(AppError::transport)?;
        if !response.ok() {
            return Err(AppError::http("Error al actualizar las ventas"));
        }
        Ok(())
    }

    async fn update_all_goals(&self, year: i32, month: u32, goal: f64) -> AppResult<()> {
        let body = GoalRequest { year, month, goal };
        let response = self
            .authorized(Request::put(&api_url("/goals/all")))
            .json(&body)
            .map_err(AppError::transport)?
            .send()
            .await
            .map_err(AppError::transport)?;
        if !response.ok() {
            return Err(AppError::http(
                "Error al actualizar las metas de todos los asesores",
            ));
        }
        Ok(())
    }

    async fn get_dashboard_metrics(
        &self,
        year: i32,
        month: u32,
    ) -> AppResult<Option<DashboardMetrics>> {
        let url = api_url(&format!("/metrics/dashboard?year={}&month={}", year, month));
        let response = Request::get(&url)
            .send()
            .await
            .map_err(AppError::transport)?;
        if response.status() == 404 {
            return Ok(None);
        }
        if !response.ok() {
            return Err(AppError::http("Error al obtener las métricas"));
        }
        let metrics: DashboardMetrics = response.json().await.map_err(AppError::transport)?;
        Ok(Some(metrics))
    }
}
