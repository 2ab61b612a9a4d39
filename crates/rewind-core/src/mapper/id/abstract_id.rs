//! Query restrictions shared by every identifier strategy.

use crate::{
    query::{BinaryOp, Connective},
    Parameters, QueryParameterData,
};

pub(super) fn add_id_equals_to_query(
    parameters: &mut Parameters,
    param_data: Vec<QueryParameterData>,
    prefix: Option<&str>,
    equals: bool,
) {
    let parameters = parameters_to_use(parameters, &param_data);

    for data in param_data {
        let property = data.property(prefix);

        if data.value().is_null() {
            parameters.add_null_restriction(property, equals);
        } else {
            parameters.add_where_with_param(
                property,
                BinaryOp::equality(equals),
                data.into_value(),
            );
        }
    }
}

pub(super) fn add_named_id_equals_to_query(
    parameters: &mut Parameters,
    param_data: Vec<QueryParameterData>,
    prefix: Option<&str>,
    equals: bool,
) {
    let parameters = parameters_to_use(parameters, &param_data);

    for data in &param_data {
        parameters.add_where_with_named_param(
            data.property(prefix),
            BinaryOp::equality(equals),
            data.query_parameter_name(),
        );
    }
}

pub(super) fn add_ids_equal_to_query(
    parameters: &mut Parameters,
    param_data1: Vec<QueryParameterData>,
    prefix1: Option<&str>,
    param_data2: Vec<QueryParameterData>,
    prefix2: Option<&str>,
) {
    let parameters = parameters_to_use(parameters, &param_data1);

    for (data1, data2) in param_data1.iter().zip(&param_data2) {
        parameters.add_where(
            data1.property(prefix1),
            BinaryOp::Eq,
            data2.property(prefix2),
        );
    }
}

/// Multi-property identifiers get their own `and` group.
fn parameters_to_use<'a>(
    parameters: &'a mut Parameters,
    param_data: &[QueryParameterData],
) -> &'a mut Parameters {
    if param_data.len() > 1 {
        parameters.add_sub_parameters(Connective::And)
    } else {
        parameters
    }
}
