use std::rc::Rc;

use contracts::dashboards::metrics::DashboardMetrics;
use contracts::domain::adviser::{Adviser, AdviserId, AdviserRepository, AdviserUpdate, NewAdviser};
use contracts::error::{AppError, AppResult};
use contracts::usecases::adviser::{
    CreateAdviserUseCase, DeleteAdviserUseCase, GetAdviserByIdUseCase, GetAllAdvisersUseCase,
    GetDashboardMetricsUseCase, HandleSumUseCase, UpdateAdviserUseCase, UpdateAllGoalsUseCase,
    UpdateGoalUseCase, UpdateMonthlySalesUseCase,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::notifications::NotificationService;

/// The full adviser use-case set over one repository.
pub struct AdviserUseCases {
    pub get_all: GetAllAdvisersUseCase,
    pub get_by_id: GetAdviserByIdUseCase,
    pub create: CreateAdviserUseCase,
    pub update: UpdateAdviserUseCase,
    pub delete: DeleteAdviserUseCase,
    pub handle_sum: HandleSumUseCase,
    pub update_goal: UpdateGoalUseCase,
    pub update_monthly_sales: UpdateMonthlySalesUseCase,
    pub update_all_goals: UpdateAllGoalsUseCase,
    pub dashboard_metrics: GetDashboardMetricsUseCase,
}

impl AdviserUseCases {
    pub fn new(repository: Rc<dyn AdviserRepository>) -> Self {
        Self {
            get_all: GetAllAdvisersUseCase::new(repository.clone()),
            get_by_id: GetAdviserByIdUseCase::new(repository.clone()),
            create: CreateAdviserUseCase::new(repository.clone()),
            update: UpdateAdviserUseCase::new(repository.clone()),
            delete: DeleteAdviserUseCase::new(repository.clone()),
            handle_sum: HandleSumUseCase::new(repository.clone()),
            update_goal: UpdateGoalUseCase::new(repository.clone()),
            update_monthly_sales: UpdateMonthlySalesUseCase::new(repository.clone()),
            update_all_goals: UpdateAllGoalsUseCase::new(repository.clone()),
            dashboard_metrics: GetDashboardMetricsUseCase::new(repository),
        }
    }
}

/// Controller for the adviser surfaces: fetched data, UI flags and the
/// actions the views dispatch.
///
/// Signals hold plain data. The use cases are not `Send` (they wrap the
/// wasm HTTP adapter) and live behind a local `StoredValue`, which keeps
/// the store itself `Copy` and safe to move into any closure.
#[derive(Clone, Copy)]
pub struct AdvisersStore {
    pub advisers: RwSignal<Vec<Adviser>>,
    pub current_adviser: RwSignal<Option<Adviser>>,
    pub metrics: RwSignal<Option<DashboardMetrics>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    usecases: StoredValue<Rc<AdviserUseCases>, LocalStorage>,
    notifications: NotificationService,
}

impl AdvisersStore {
    pub fn new(repository: Rc<dyn AdviserRepository>, notifications: NotificationService) -> Self {
        Self {
            advisers: RwSignal::new(Vec::new()),
            current_adviser: RwSignal::new(None),
            metrics: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            usecases: StoredValue::new_local(Rc::new(AdviserUseCases::new(repository))),
            notifications,
        }
    }

    fn usecases(&self) -> Rc<AdviserUseCases> {
        self.usecases.get_value()
    }

    fn begin(&self) {
        self.loading.set(true);
        self.error.set(None);
    }

    fn fail(&self, err: &AppError) {
        let message = err.to_string();
        log::error!("{}", message);
        self.error.set(Some(message.clone()));
        self.notifications.show_error(message);
    }

    /// Fire-and-forget roster load, for page mounts.
    pub fn fetch_advisers(&self) {
        let this = *self;
        spawn_local(async move {
            let _ = this.load_advisers().await;
        });
    }

    pub async fn load_advisers(&self) -> AppResult<()> {
        self.begin();
        let result = self.usecases().get_all.execute().await;
        let outcome = match result {
            Ok(list) => {
                self.advisers.set(list);
                Ok(())
            }
            Err(e) => {
                self.fail(&e);
                Err(e)
            }
        };
        self.loading.set(false);
        outcome
    }

    pub async fn fetch_adviser_by_id(&self, id: AdviserId) -> Option<Adviser> {
        self.begin();
        let result = self.usecases().get_by_id.execute(id).await;
        let outcome = match result {
            Ok(adviser) => {
                self.current_adviser.set(Some(adviser.clone()));
                Some(adviser)
            }
            Err(e) => {
                self.fail(&e);
                None
            }
        };
        self.loading.set(false);
        outcome
    }

    pub async fn create_adviser(&self, draft: &NewAdviser) -> AppResult<Adviser> {
        self.begin();
        let result = self.usecases().create.execute(draft).await;
        match &result {
            Ok(created) => self.advisers.update(|list| list.push(created.clone())),
            Err(e) => self.fail(e),
        }
        self.loading.set(false);
        result
    }

    pub async fn update_adviser(&self, id: AdviserId, update: &AdviserUpdate) -> AppResult<Adviser> {
        self.begin();
        let result = self.usecases().update.execute(id, update).await;
        match &result {
            Ok(updated) => self.update_adviser_in_store(updated),
            Err(e) => self.fail(e),
        }
        self.loading.set(false);
        result
    }

    pub async fn delete_adviser(&self, id: AdviserId) -> AppResult<()> {
        self.begin();
        let result = self.usecases().delete.execute(id).await;
        match &result {
            Ok(()) => {
                self.advisers.update(|list| list.retain(|a| a.id != id));
                if self.current_adviser.get_untracked().map(|a| a.id) == Some(id) {
                    self.current_adviser.set(None);
                }
            }
            Err(e) => self.fail(e),
        }
        self.loading.set(false);
        result
    }

    /// Register one sale, then reload the roster so totals reflect it.
    pub async fn increment_sales(&self, adviser: &Adviser, value: f64) -> AppResult<()> {
        self.begin();
        let result = self.usecases().handle_sum.execute(adviser, value).await;
        match &result {
            Ok(()) => match self.usecases().get_all.execute().await {
                Ok(list) => self.advisers.set(list),
                Err(e) => self.fail(&e),
            },
            Err(e) => self.fail(e),
        }
        self.loading.set(false);
        result
    }

    pub async fn update_goal(
        &self,
        id: AdviserId,
        year: i32,
        month: u32,
        goal: f64,
    ) -> AppResult<()> {
        self.begin();
        let result = self
            .usecases()
            .update_goal
            .execute(id, year, month, goal)
            .await;
        match &result {
            Ok(()) => self.refresh_adviser(id).await,
            Err(e) => self.fail(e),
        }
        self.loading.set(false);
        result
    }

    pub async fn update_monthly_sales(
        &self,
        id: AdviserId,
        year: i32,
        month: u32,
        total_sales: f64,
    ) -> AppResult<()> {
        self.begin();
        let result = self
            .usecases()
            .update_monthly_sales
            .execute(id, year, month, total_sales)
            .await;
        match &result {
            Ok(()) => self.refresh_adviser(id).await,
            Err(e) => self.fail(e),
        }
        self.loading.set(false);
        result
    }

    pub async fn update_all_goals(&self, year: i32, month: u32, goal: f64) -> AppResult<()> {
        self.begin();
        let result = self
            .usecases()
            .update_all_goals
            .execute(year, month, goal)
            .await;
        if let Err(e) = &result {
            self.fail(e);
        }
        self.loading.set(false);
        result
    }

    pub async fn fetch_dashboard_metrics(&self, year: i32, month: u32) -> AppResult<()> {
        self.begin();
        let result = self.usecases().dashboard_metrics.execute(year, month).await;
        let outcome = match result {
            Ok(metrics) => {
                self.metrics.set(Some(metrics));
                Ok(())
            }
            Err(e) => {
                self.fail(&e);
                Err(e)
            }
        };
        self.loading.set(false);
        outcome
    }

    /// Replace the adviser in both the roster and the current selection.
    pub fn update_adviser_in_store(&self, updated: &Adviser) {
        self.advisers.update(|list| {
            for a in list.iter_mut() {
                if a.id == updated.id {
                    *a = updated.clone();
                }
            }
        });
        if self.current_adviser.get_untracked().map(|a| a.id) == Some(updated.id) {
            self.current_adviser.set(Some(updated.clone()));
        }
    }

    /// Select from the already-loaded roster, without a network call.
    pub fn select_adviser(&self, id: AdviserId) {
        let found = self
            .advisers
            .get_untracked()
            .into_iter()
            .find(|a| a.id == id);
        self.current_adviser.set(found);
    }

    pub fn clear_selected_adviser(&self) {
        self.current_adviser.set(None);
    }

    async fn refresh_adviser(&self, id: AdviserId) {
        match self.usecases().get_by_id.execute(id).await {
            Ok(updated) => self.update_adviser_in_store(&updated),
            Err(e) => self.fail(&e),
        }
    }
}

/// Hook to access the advisers store from any component.
pub fn use_advisers_store() -> AdvisersStore {
    use_context::<AdvisersStore>().expect("AdvisersStore not provided in context")
}
