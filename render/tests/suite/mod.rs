mod result_rendering;
