use crate::error::Result;
use crate::models::{ClimateVariables, TimePeriod};
use crate::processors::{CsvValidator, Partitioner};
use crate::session::FormDriver;
use crate::utils::constants::{
    BULK_URL, DOWNLOAD_BUTTON, LOC_FILE, LOC_LAT, LOC_LON, LOC_METHOD_COORDS, SINGLE_URL,
    SUBMIT_BUTTON,
};
use crate::utils::progress::ProgressReporter;
use std::path::Path;
use tracing::info;

/// Result of a bulk submission pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkOutcome {
    pub row_count: usize,
    pub submissions: usize,
}

/// Orchestrates PRISM Explorer requests over a [`FormDriver`].
///
/// One session, one driver. Submissions are strictly sequential; a bulk
/// file larger than the per-request row limit is partitioned and each
/// partition is submitted, then deleted, in order.
pub struct PrismSession<D: FormDriver> {
    driver: D,
    validator: CsvValidator,
    partitioner: Partitioner,
}

impl<D: FormDriver> PrismSession<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            validator: CsvValidator::new(),
            partitioner: Partitioner::new(),
        }
    }

    /// Submit a single latitude/longitude and download the result.
    pub fn submit_point(
        &mut self,
        latitude: f64,
        longitude: f64,
        variables: &ClimateVariables,
        period: &TimePeriod,
    ) -> Result<()> {
        period.validate()?;
        info!(latitude, longitude, "submitting single-point request");

        self.driver.open(SINGLE_URL)?;
        self.driver.click(LOC_METHOD_COORDS)?;
        self.driver.fill(LOC_LAT, &latitude.to_string())?;
        self.driver.fill(LOC_LON, &longitude.to_string())?;

        self.apply_form_settings(variables, period)?;
        self.submit_and_download()
    }

    /// Submit a bulk coordinate file, partitioning first when it exceeds
    /// the per-request row limit.
    ///
    /// Each partition is deleted as soon as its submission succeeds; on
    /// error, partitions not yet consumed are left on disk for the caller.
    pub fn submit_bulk(
        &mut self,
        csv_path: &Path,
        variables: &ClimateVariables,
        period: &TimePeriod,
        progress: Option<&ProgressReporter>,
    ) -> Result<BulkOutcome> {
        period.validate()?;
        let report = self.validator.validate(csv_path)?;

        if !report.needs_partition {
            self.submit_file(csv_path, variables, period)?;
            if let Some(p) = progress {
                p.increment(1);
            }
            return Ok(BulkOutcome {
                row_count: report.row_count,
                submissions: 1,
            });
        }

        let partitions = self.partitioner.partition(csv_path)?;
        let submissions = partitions.len();
        info!(
            rows = report.row_count,
            partitions = submissions,
            "bulk file exceeds row limit, submitting partitions"
        );

        for partition in &partitions {
            self.submit_file(partition, variables, period)?;
            std::fs::remove_file(partition)?;
            if let Some(p) = progress {
                p.increment(1);
            }
        }

        Ok(BulkOutcome {
            row_count: report.row_count,
            submissions,
        })
    }

    fn submit_file(
        &mut self,
        path: &Path,
        variables: &ClimateVariables,
        period: &TimePeriod,
    ) -> Result<()> {
        info!(file = %path.display(), "submitting bulk request");
        self.driver.open(BULK_URL)?;
        self.driver.attach_file(LOC_FILE, path)?;
        self.apply_form_settings(variables, period)?;
        self.submit_and_download()
    }

    fn apply_form_settings(
        &mut self,
        variables: &ClimateVariables,
        period: &TimePeriod,
    ) -> Result<()> {
        self.driver.click(period.radio_element())?;
        for (element_id, value) in period.dropdown_selections() {
            self.driver.select_value(element_id, &value)?;
        }
        for element_id in variables.toggled_elements() {
            self.driver.click(element_id)?;
        }
        Ok(())
    }

    fn submit_and_download(&mut self) -> Result<()> {
        self.driver.click(SUBMIT_BUTTON)?;
        self.driver.click(DOWNLOAD_BUTTON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrismError;
    use crate::utils::constants::{CVAR_PPT, CVAR_TMAX, TPER_MONTHLY, TPER_MONTHLY_NORMALS};
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Records every driver call as a flat action log.
    #[derive(Default)]
    struct RecordingDriver {
        actions: Vec<String>,
        fail_on_open: bool,
    }

    impl FormDriver for RecordingDriver {
        fn open(&mut self, url: &str) -> Result<()> {
            if self.fail_on_open {
                return Err(PrismError::Driver("page load timed out".to_string()));
            }
            self.actions.push(format!("open:{}", url));
            Ok(())
        }

        fn click(&mut self, element_id: &str) -> Result<()> {
            self.actions.push(format!("click:{}", element_id));
            Ok(())
        }

        fn fill(&mut self, element_id: &str, value: &str) -> Result<()> {
            self.actions.push(format!("fill:{}={}", element_id, value));
            Ok(())
        }

        fn select_value(&mut self, element_id: &str, value: &str) -> Result<()> {
            self.actions
                .push(format!("select:{}={}", element_id, value));
            Ok(())
        }

        fn attach_file(&mut self, element_id: &str, path: &Path) -> Result<()> {
            self.actions
                .push(format!("attach:{}={}", element_id, path.display()));
            Ok(())
        }
    }

    fn write_csv(dir: &TempDir, name: &str, rows: usize) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        for i in 0..rows {
            writeln!(file, "44.{:04},-121.{:04},site{}", i, i, i).unwrap();
        }
        path
    }

    #[test]
    fn test_submit_point_action_sequence() {
        let mut session = PrismSession::new(RecordingDriver::default());
        let vars = ClimateVariables {
            max_temp: true,
            ..Default::default()
        };
        session
            .submit_point(44.0582, -121.3153, &vars, &TimePeriod::MonthlyNormals)
            .unwrap();

        let actions = &session.driver.actions;
        assert_eq!(
            actions,
            &vec![
                format!("open:{}", SINGLE_URL),
                format!("click:{}", LOC_METHOD_COORDS),
                format!("fill:{}=44.0582", LOC_LAT),
                format!("fill:{}=-121.3153", LOC_LON),
                format!("click:{}", TPER_MONTHLY_NORMALS),
                format!("click:{}", CVAR_TMAX),
                format!("click:{}", SUBMIT_BUTTON),
                format!("click:{}", DOWNLOAD_BUTTON),
            ]
        );
    }

    #[test]
    fn test_submit_point_rejects_bad_period() {
        let mut session = PrismSession::new(RecordingDriver::default());
        let period = TimePeriod::Annual {
            start_year: 2025,
            end_year: 2020,
        };
        let err = session
            .submit_point(44.0, -121.0, &ClimateVariables::default(), &period)
            .unwrap_err();
        assert!(matches!(err, PrismError::InvalidDateRange(_)));
        // No driver interaction before validation passes
        assert!(session.driver.actions.is_empty());
    }

    #[test]
    fn test_small_bulk_file_submitted_once() {
        let dir = TempDir::new().unwrap();
        let csv = write_csv(&dir, "coords.csv", 3);

        let mut session = PrismSession::new(RecordingDriver::default());
        let outcome = session
            .submit_bulk(
                &csv,
                &ClimateVariables::default(),
                &TimePeriod::MonthlyNormals,
                None,
            )
            .unwrap();

        assert_eq!(outcome.row_count, 3);
        assert_eq!(outcome.submissions, 1);
        assert!(csv.exists(), "source file must not be deleted");
        assert!(session
            .driver
            .actions
            .contains(&format!("attach:{}={}", LOC_FILE, csv.display())));
    }

    #[test]
    fn test_oversized_bulk_file_partitioned_and_cleaned_up() {
        let dir = TempDir::new().unwrap();
        let csv = write_csv(&dir, "coords.csv", 501);

        let mut session = PrismSession::new(RecordingDriver::default());
        let outcome = session
            .submit_bulk(
                &csv,
                &ClimateVariables::default(),
                &TimePeriod::MonthlyNormals,
                None,
            )
            .unwrap();

        assert_eq!(outcome.row_count, 501);
        assert_eq!(outcome.submissions, 2);

        // Partitions submitted in order, then removed
        let attaches: Vec<&String> = session
            .driver
            .actions
            .iter()
            .filter(|a| a.starts_with("attach:"))
            .collect();
        assert_eq!(attaches.len(), 2);
        assert!(attaches[0].contains("coords.csv_1.csv"));
        assert!(attaches[1].contains("coords.csv_2.csv"));

        assert!(csv.exists());
        assert!(!dir.path().join("coords.csv_1.csv").exists());
        assert!(!dir.path().join("coords.csv_2.csv").exists());
    }

    #[test]
    fn test_bulk_validation_failure_aborts_before_driver() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "44.0,-121.3,ok").unwrap();
        writeln!(file, "abc,-112.2,site1").unwrap();

        let mut session = PrismSession::new(RecordingDriver::default());
        let err = session
            .submit_bulk(
                &path,
                &ClimateVariables::default(),
                &TimePeriod::MonthlyNormals,
                None,
            )
            .unwrap_err();

        assert!(matches!(err, PrismError::InvalidLatitude { row: 2, .. }));
        assert!(session.driver.actions.is_empty());
    }

    #[test]
    fn test_driver_failure_propagates() {
        let dir = TempDir::new().unwrap();
        let csv = write_csv(&dir, "coords.csv", 2);

        let driver = RecordingDriver {
            fail_on_open: true,
            ..Default::default()
        };
        let mut session = PrismSession::new(driver);
        let err = session
            .submit_bulk(
                &csv,
                &ClimateVariables::default(),
                &TimePeriod::MonthlyNormals,
                None,
            )
            .unwrap_err();
        assert!(matches!(err, PrismError::Driver(_)));
    }

    #[test]
    fn test_variable_toggles_follow_mapping_order() {
        let mut session = PrismSession::new(RecordingDriver::default());
        let vars = ClimateVariables {
            precipitation: false,
            max_temp: true,
            ..Default::default()
        };
        let period = TimePeriod::Monthly {
            start_month: 1,
            start_year: 2020,
            end_month: 6,
            end_year: 2020,
        };
        session.submit_point(44.0, -121.0, &vars, &period).unwrap();

        let actions = &session.driver.actions;
        let radio_pos = actions
            .iter()
            .position(|a| a == &format!("click:{}", TPER_MONTHLY))
            .unwrap();
        let ppt_pos = actions
            .iter()
            .position(|a| a == &format!("click:{}", CVAR_PPT))
            .unwrap();
        let tmax_pos = actions
            .iter()
            .position(|a| a == &format!("click:{}", CVAR_TMAX))
            .unwrap();
        assert!(radio_pos < ppt_pos);
        assert!(ppt_pos < tmax_pos);
    }
}
