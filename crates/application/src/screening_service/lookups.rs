use super::*;

impl ScreeningService {
    /// Lists screenings for an upstream call id.
    pub async fn screenings_by_call(&self, call_id: &str) -> AppResult<Vec<InterviewScreening>> {
        self.screenings
            .find_screenings(&ScreeningFilter {
                call_id: Some(call_id.to_owned()),
                ..ScreeningFilter::default()
            })
            .await
    }

    /// Lists screenings for a user reference.
    pub async fn screenings_by_user(&self, user_id: &str) -> AppResult<Vec<InterviewScreening>> {
        self.screenings
            .find_screenings(&ScreeningFilter {
                user_id: Some(user_id.to_owned()),
                ..ScreeningFilter::default()
            })
            .await
    }

    /// Lists screenings for a job.
    pub async fn screenings_by_job(&self, job_id: JobId) -> AppResult<Vec<InterviewScreening>> {
        self.screenings
            .find_screenings(&ScreeningFilter {
                job_id: Some(job_id),
                ..ScreeningFilter::default()
            })
            .await
    }

    /// Lists screenings in a status given by its storage value.
    pub async fn screenings_by_status(&self, status: &str) -> AppResult<Vec<InterviewScreening>> {
        let status = status.parse::<ScreeningStatus>()?;
        self.screenings
            .find_screenings(&ScreeningFilter {
                status: Some(status),
                ..ScreeningFilter::default()
            })
            .await
    }

    /// Pages screenings together with their resolved employees.
    pub async fn list_screenings_with_employee(
        &self,
        filter: &ScreeningFilter,
        page: PageRequest,
    ) -> AppResult<Page<ScreeningWithEmployee>> {
        let screenings = self.screenings.list_screenings(filter, page).await?;
        let mut items = Vec::with_capacity(screenings.items.len());
        for screening in screenings.items {
            items.push(self.with_employee(screening).await?);
        }

        Ok(Page::new(items, screenings.total, screenings.request))
    }

    /// Loads one screening together with its resolved employee.
    pub async fn screening_with_employee(
        &self,
        screening_id: ScreeningId,
    ) -> AppResult<ScreeningWithEmployee> {
        let screening = self.get_screening(screening_id).await?;
        self.with_employee(screening).await
    }

    async fn with_employee(
        &self,
        screening: InterviewScreening,
    ) -> AppResult<ScreeningWithEmployee> {
        let employee = match screening.employee_id() {
            Some(employee_id) => self.employees.find_employee(employee_id).await?,
            None => None,
        };

        Ok(ScreeningWithEmployee {
            screening,
            employee,
        })
    }
}
