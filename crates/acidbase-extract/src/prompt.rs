/// Instructions sent alongside the document. The reply must be a single
/// flat JSON object using the lab form's field keys.
pub const EXTRACTION_PROMPT: &str = "\
Read the attached arterial blood gas (ABG) report and return one flat JSON object \
with these keys: ph, paco2, hco3, pao2, fio2, na, cl (numbers) and name, age, mrn, \
hospital (strings). Omit any key whose value does not appear in the report, except \
fio2, which defaults to 0.21. Use the keys exactly as written. \
Return only the JSON object, without commentary or Markdown.";
