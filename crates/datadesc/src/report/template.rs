//! The names-file template.

use std::fmt;

/// Horizontal rule opening each class-distribution block.
pub const SECTION_RULE: &str = "------------------------------------------------------";

// Sections 2-4 are example text from the Car Evaluation dataset, left for the
// author to replace by hand.
macro_rules! names_template {
    () => {
        "
1. Title: {title}

2. Sources:
    ----------------EXAMPLE--------------------------------------
   (a) Creator: Marko Bohanec
   (b) Donors: Marko Bohanec   (marko.bohanec@ijs.si)
               Blaz Zupan      (blaz.zupan@ijs.si)
   (c) Date: June, 1997
    ----------------EXAMPLE--------------------------------------

3. Past Usage:

    ----------------EXAMPLE--------------------------------------
   The hierarchical decision model, from which this dataset is
   derived, was first presented in

   M. Bohanec and V. Rajkovic: Knowledge acquisition and explanation for
   multi-attribute decision making. In 8th Intl Workshop on Expert
   Systems and their Applications, Avignon, France. pages 59-78, 1988.

   Within machine-learning, this dataset was used for the evaluation
   of HINT (Hierarchy INduction Tool), which was proved to be able to
   completely reconstruct the original hierarchical model. This,
   together with a comparison with C4.5, is presented in

   B. Zupan, M. Bohanec, I. Bratko, J. Demsar: Machine learning by
   function decomposition. ICML-97, Nashville, TN. 1997 (to appear)
   ----------------EXAMPLE--------------------------------------

4. Relevant Information Paragraph:

   ----------------EXAMPLE--------------------------------------
   Car Evaluation Database was derived from a simple hierarchical
   decision model originally developed for the demonstration of DEX
   (M. Bohanec, V. Rajkovic: Expert system for decision
   making. Sistemica 1(1), pp. 145-157, 1990.). The model evaluates
   cars according to the following concept structure:

   CAR                      car acceptability
   . PRICE                  overall price
   . . buying               buying price
   . . maint                price of the maintenance
   . TECH                   technical characteristics
   . . COMFORT              comfort
   . . . doors              number of doors
   . . . persons            capacity in terms of persons to carry
   . . . lug_boot           the size of luggage boot
   . . safety               estimated safety of the car

   Input attributes are printed in lowercase. Besides the target
   concept (CAR), the model includes three intermediate concepts:
   PRICE, TECH, COMFORT. Every concept is in the original model
   related to its lower level descendants by a set of examples (for
   these examples sets see http://www-ai.ijs.si/BlazZupan/car.html).

   The Car Evaluation Database contains examples with the structural
   information removed, i.e., directly relates CAR to the six input
   attributes: buying, maint, doors, persons, lug_boot, safety.

   Because of known underlying concept structure, this database may be
   particularly useful for testing constructive induction and
   structure discovery methods.
   ----------------EXAMPLE--------------------------------------

5. Number of Instances: {instances}
   (instances completely cover the attribute space)

6. Number of Attributes: {attributes}

7. Attribute Values:

{attribute_values}

8. Missing Attribute Values: {missing}

9. Class Distribution (number of instances per class)

{class_distribution}
"
    };
}

/// Values interpolated into the names-file template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamesReport {
    pub title: String,
    pub instances: usize,
    pub attributes: usize,
    /// Pre-formatted section 7 body.
    pub attribute_values: String,
    pub missing: usize,
    /// Pre-formatted section 9 body.
    pub class_distribution: String,
}

impl fmt::Display for NamesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            names_template!(),
            title = self.title,
            instances = self.instances,
            attributes = self.attributes,
            attribute_values = self.attribute_values,
            missing = self.missing,
            class_distribution = self.class_distribution,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NamesReport {
        NamesReport {
            title: "Cars".to_string(),
            instances: 3,
            attributes: 2,
            attribute_values: "   color: red, blue\n".to_string(),
            missing: 1,
            class_distribution: String::new(),
        }
    }

    #[test]
    fn test_sections_in_order() {
        let text = sample().to_string();
        let markers = [
            "1. Title: Cars\n",
            "2. Sources:",
            "3. Past Usage:",
            "4. Relevant Information Paragraph:",
            "5. Number of Instances: 3\n   (instances completely cover the attribute space)",
            "6. Number of Attributes: 2\n",
            "7. Attribute Values:\n\n   color: red, blue\n",
            "8. Missing Attribute Values: 1\n",
            "9. Class Distribution (number of instances per class)\n",
        ];

        let mut cursor = 0;
        for marker in markers {
            let found = text[cursor..]
                .find(marker)
                .unwrap_or_else(|| panic!("missing or out of order: {marker:?}"));
            cursor += found + marker.len();
        }
    }

    #[test]
    fn test_template_framing() {
        let text = sample().to_string();
        assert!(text.starts_with("\n1. Title: Cars\n\n2. Sources:\n"));
        assert!(text.ends_with("9. Class Distribution (number of instances per class)\n\n\n"));
    }
}
