use hospi::prelude as rs;
use hospi::prelude::{Cases, Real};
use paste::paste;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use pyo3::wrap_pyfunction;
use pythonize::{depythonize, pythonize};

macro_rules! py_immutable_props {
    ($name:ident { $($x:ident : $t:ident),*}) => {
        paste! {
            #[pymethods]
            impl $name {
                $(
                    #[getter]
                    pub fn [<get_ $x>](&self) -> PyResult<$t> {
                        Ok(self.data.$x())
                    }
                )*
            }
        }
    };
}

fn value_error(err: rs::HospiError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

#[pyclass]
#[derive(Debug)]
pub struct Estimate {
    data: rs::Estimate,
}

#[pymethods]
impl Estimate {
    /// Likelihood P(H | cases) for every case count, starting from zero.
    fn curve(&self) -> Vec<Real> {
        self.data.curve().to_vec()
    }

    /// Parameters used in the estimate, as a dict.
    fn params(&self, py: Python) -> PyResult<PyObject> {
        Ok(pythonize(py, &self.data.params())?)
    }

    /// Mean, std, mode and central credible interval of the posterior. Return
    /// None when the observation has zero probability.
    #[pyo3(signature = (level = 0.95))]
    fn summary(&self, py: Python, level: Real) -> PyResult<PyObject> {
        match self.data.summary(level) {
            Some(st) => Ok(pythonize(py, &st)?),
            None => Ok(py.None()),
        }
    }

    /// TOML report with all results.
    #[pyo3(signature = (level = 0.95))]
    fn report(&self, level: Real) -> PyResult<String> {
        rs::Report::new(&self.data)
            .with_level(level)
            .describe()
            .map_err(value_error)
    }

    fn is_degenerate(&self) -> bool {
        self.data.is_degenerate()
    }

    fn __repr__(&self) -> PyResult<String> {
        Ok(format!("{}", self.data))
    }
}

py_immutable_props!(Estimate {
    posterior: Real,
    norm: Real,
    interest: Real
});

/// Posterior probability for the number of real cases to be in [rl, ru].
#[pyfunction]
#[pyo3(signature = (rl, ru, serious = 0.01, hlow = 32.0, hupp = 34.0, margin = 5000))]
fn posterior(
    rl: Cases,
    ru: Cases,
    serious: Real,
    hlow: Real,
    hupp: Real,
    margin: Cases,
) -> PyResult<Real> {
    let params = rs::BayesParams::new(rl, ru)
        .with_serious(serious)
        .with_hospitalized(hlow, hupp)
        .with_margin(margin);
    let data = rs::estimate(params).map_err(value_error)?;
    Ok(data.posterior())
}

/// Full estimate for the interval [rl, ru]. Keyword arguments override the
/// default params (serious, hlow, hupp, margin).
#[pyfunction]
#[pyo3(signature = (rl, ru, **kwds))]
fn estimate(rl: Cases, ru: Cases, kwds: Option<&PyDict>) -> PyResult<Estimate> {
    let mut params: rs::BayesParams = match kwds {
        Some(dic) => depythonize(dic.as_ref())?,
        None => Default::default(),
    };
    params.set_rl(rl).set_ru(ru);
    let data = rs::estimate(params).map_err(value_error)?;
    Ok(Estimate { data })
}

/// Monte Carlo estimate of the posterior from n rejection-sampling draws.
#[pyfunction]
#[pyo3(signature = (rl, ru, n = 10_000, seed = None, **kwds))]
fn simulate(
    py: Python,
    rl: Cases,
    ru: Cases,
    n: usize,
    seed: Option<u64>,
    kwds: Option<&PyDict>,
) -> PyResult<PyObject> {
    let mut params: rs::BayesParams = match kwds {
        Some(dic) => depythonize(dic.as_ref())?,
        None => Default::default(),
    };
    params.set_rl(rl).set_ru(ru);
    let mut sampler = rs::RejectionSampler::new(params).map_err(value_error)?;
    if let Some(seed) = seed {
        sampler.seed(seed);
    }
    Ok(pythonize(py, &sampler.run(n))?)
}

#[pymodule]
fn hospipy(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<Estimate>()?;
    m.add_function(wrap_pyfunction!(posterior, m)?)?;
    m.add_function(wrap_pyfunction!(estimate, m)?)?;
    m.add_function(wrap_pyfunction!(simulate, m)?)?;

    Ok(())
}
